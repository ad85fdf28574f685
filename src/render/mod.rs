//! Markup builders.
//!
//! Every renderer is a pure function from fetched data to a [`View`]: the
//! markup for one document region plus the interaction bindings for the
//! elements that markup created. Registering the bindings is the document's
//! job, so nothing in here touches navigation state.

pub mod champions;
pub mod detail;
pub mod matrix;
pub mod page;
pub mod pagination;

use crate::config::DEFAULT_DDRAGON_VERSION;
use crate::lookup::Catalog;
use crate::view::event::Event;

pub const NO_CHAMPIONS: &str = "沒有找到英雄數據";
pub const NO_TIER_DATA: &str = "沒有找到梯隊資料";
pub const DETAIL_UNAVAILABLE: &str = "載入英雄詳情時發生錯誤";
pub const NO_RUNES: &str = "沒有找到符文配置資料";
pub const NO_BUILDS: &str = "沒有找到出裝資料";
pub const NO_MATCHUPS: &str = "沒有找到對位資料";
pub const NO_SYNERGIES: &str = "沒有找到協同資料";
pub const NO_TIPS: &str = "沒有可用的小技巧";
pub const SYNERGY_UNAVAILABLE: &str = "載入協同矩陣資料時發生錯誤";
pub const MATCHUP_UNAVAILABLE: &str = "載入對位矩陣資料時發生錯誤";

/// An interactive element and the event it fires.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub target: String,
    pub event: Event,
}

impl Binding {
    pub fn new(target: impl Into<String>, event: Event) -> Self {
        Binding {
            target: target.into(),
            event,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub html: String,
    pub bindings: Vec<Binding>,
}

impl View {
    pub fn markup(html: String) -> Self {
        View {
            html,
            bindings: Vec::new(),
        }
    }

    pub fn with_bindings(html: String, bindings: Vec<Binding>) -> Self {
        View { html, bindings }
    }

    pub fn empty() -> Self {
        View::default()
    }

    pub fn placeholder(text: &str) -> Self {
        View::markup(placeholder(text))
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Everything a renderer needs besides the payload itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub ddragon_version: String,
    pub catalog: Catalog,
}

impl RenderContext {
    pub fn new(ddragon_version: &str, catalog: Catalog) -> Self {
        RenderContext {
            ddragon_version: ddragon_version.to_string(),
            catalog,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext::new(DEFAULT_DDRAGON_VERSION, Catalog::default())
    }
}

pub fn placeholder(text: &str) -> String {
    format!(
        r#"<div class="text-center py-8 text-gray-500">{}</div>"#,
        html_escape(text)
    )
}

pub(crate) fn section_placeholder(text: &str) -> String {
    format!(
        r#"<div class="text-center py-4 text-gray-500">{}</div>"#,
        html_escape(text)
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// CSS class for a tier badge or header.
pub fn tier_class(tier: &str) -> String {
    format!("tier-{}", tier.to_lowercase())
}
