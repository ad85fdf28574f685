use super::{html_escape, View};
use crate::api::models::VersionInfo;

pub const TEAM_BUILDER_TITLE: &str = "ARAM 隊伍模擬器";
pub const TEAM_BUILDER_NOTICE: &str = "此功能目前正在開發中，敬請期待！";

pub fn version_header(info: &VersionInfo) -> View {
    let patch = info
        .current_version
        .as_deref()
        .map(|v| format!(r#" | 遊戲版本 <span id="current-version">{}</span>"#, html_escape(v)))
        .unwrap_or_default();

    View::markup(format!(
        r#"<div class="text-xs text-gray-500">API <span id="api-version">{api}</span> | 更新時間 <span id="last-updated">{updated}</span> | 樣本數 <span id="total-samples">{samples}</span>{patch}</div>"#,
        api = html_escape(&info.api_version),
        updated = html_escape(&info.last_updated),
        samples = group_thousands(info.total_samples),
        patch = patch,
    ))
}

/// Static placeholder for the team builder page, which has no backend.
pub fn team_builder_notice() -> View {
    View::markup(format!(
        r#"<div class="bg-white rounded-lg shadow-md p-6 mb-8">
    <h2 class="text-2xl font-bold mb-4">{}</h2>
    <p class="mb-6">{}</p>
</div>"#,
        TEAM_BUILDER_TITLE, TEAM_BUILDER_NOTICE
    ))
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn version_header_shows_patch_when_known() {
        let mut info = VersionInfo {
            api_version: "1.0.0".to_string(),
            last_updated: "2024-05-01 12:00:00".to_string(),
            total_samples: 1_000_000,
            current_version: None,
        };
        let html = version_header(&info).html;
        assert!(html.contains("1,000,000"));
        assert!(!html.contains("current-version"));

        info.current_version = Some("14.9".to_string());
        assert!(version_header(&info).html.contains(">14.9</span>"));
    }
}
