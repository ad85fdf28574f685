use super::{html_escape, RenderContext, View, MATCHUP_UNAVAILABLE, SYNERGY_UNAVAILABLE};
use crate::api::endpoints::champion_icon_url;
use crate::api::models::MatrixPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    Synergy,
    Matchup,
}

/// Colour band of one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    SelfPair,
    StrongPositive,
    Positive,
    Neutral,
    Negative,
    StrongNegative,
}

impl Band {
    pub fn classes(self) -> &'static str {
        match self {
            Band::SelfPair => "bg-gray-200 text-gray-600",
            Band::StrongPositive => "bg-green-100 text-green-800",
            Band::Positive => "bg-green-50 text-green-700",
            Band::Neutral => "bg-white text-gray-600",
            Band::Negative => "bg-red-50 text-red-700",
            Band::StrongNegative => "bg-red-100 text-red-800",
        }
    }
}

impl MatrixKind {
    fn title(self) -> &'static str {
        match self {
            MatrixKind::Synergy => "英雄協同矩陣",
            MatrixKind::Matchup => "英雄對位矩陣",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            MatrixKind::Synergy => {
                "此矩陣顯示了熱門英雄之間的協同效應。數值越高表示這兩個英雄一起選擇時勝率提升越多。"
            }
            MatrixKind::Matchup => {
                "此矩陣顯示了熱門英雄之間的對位勝率。數值表示縱軸英雄對陣橫軸英雄時的勝率。"
            }
        }
    }

    fn unavailable(self) -> &'static str {
        match self {
            MatrixKind::Synergy => SYNERGY_UNAVAILABLE,
            MatrixKind::Matchup => MATCHUP_UNAVAILABLE,
        }
    }

    // (strong, mild) thresholds above and below the neutral point
    fn thresholds(self) -> (f64, f64, f64, f64) {
        match self {
            MatrixKind::Synergy => (5.0, 2.0, -2.0, -5.0),
            MatrixKind::Matchup => (55.0, 52.0, 48.0, 45.0),
        }
    }

    pub fn band(self, value: f64) -> Band {
        let (strong_up, up, down, strong_down) = self.thresholds();
        if value > strong_up {
            Band::StrongPositive
        } else if value > up {
            Band::Positive
        } else if value < strong_down {
            Band::StrongNegative
        } else if value < down {
            Band::Negative
        } else {
            Band::Neutral
        }
    }

    pub fn format_value(self, value: f64) -> String {
        match self {
            MatrixKind::Synergy => format!("{}", value),
            MatrixKind::Matchup => format!("{}%", value),
        }
    }
}

/// Square check: one row per champion, one column per champion.
pub fn is_square(payload: &MatrixPayload) -> bool {
    match (&payload.champions, &payload.matrix) {
        (Some(champions), Some(matrix)) => {
            matrix.len() == champions.len() && matrix.iter().all(|row| row.len() == champions.len())
        }
        _ => false,
    }
}

pub fn matrix(kind: MatrixKind, payload: &MatrixPayload, ctx: &RenderContext) -> View {
    let (Some(champions), Some(matrix)) = (&payload.champions, &payload.matrix) else {
        return View::placeholder(kind.unavailable());
    };
    if !is_square(payload) {
        return View::placeholder(kind.unavailable());
    }

    let header = champions
        .iter()
        .map(|champion| {
            format!(
                r#"
                    <th class="border p-2 bg-gray-100"><div class="w-12 h-12 mx-auto">{}</div></th>"#,
                sprite(champion, ctx)
            )
        })
        .collect::<String>();

    let body = champions
        .iter()
        .zip(matrix)
        .enumerate()
        .map(|(i, (champion, row))| {
            let cells = row
                .iter()
                .enumerate()
                .map(|(j, value)| {
                    let (band, text) = if i == j {
                        (Band::SelfPair, "-".to_string())
                    } else {
                        (kind.band(*value), kind.format_value(*value))
                    };
                    format!(
                        r#"<td class="border p-2 text-center {}">{}</td>"#,
                        band.classes(),
                        text
                    )
                })
                .collect::<String>();

            format!(
                r#"
                <tr>
                    <th class="border p-2 bg-gray-100"><div class="w-12 h-12">{}</div></th>{}
                </tr>"#,
                sprite(champion, ctx),
                cells
            )
        })
        .collect::<String>();

    let html = format!(
        r#"<div class="bg-white rounded-lg shadow-md p-6 mb-8">
    <h2 class="text-2xl font-bold mb-6">{title}</h2>
    <p class="mb-6">{blurb}</p>
    <div class="overflow-x-auto">
        <table class="w-full border-collapse">
            <thead>
                <tr>
                    <th class="border p-2 bg-gray-100"></th>{header}
                </tr>
            </thead>
            <tbody>{body}
            </tbody>
        </table>
    </div>
</div>"#,
        title = kind.title(),
        blurb = kind.blurb(),
        header = header,
        body = body,
    );

    View::markup(html)
}

fn sprite(champion: &str, ctx: &RenderContext) -> String {
    let id = html_escape(champion);
    format!(
        r#"<img src="{src}" alt="{id}" class="w-full h-full object-cover rounded-full" title="{id}">"#,
        src = champion_icon_url(&ctx.ddragon_version, &id),
        id = id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(champions: &[&str], matrix: Vec<Vec<f64>>) -> MatrixPayload {
        MatrixPayload {
            champions: Some(champions.iter().map(|c| c.to_string()).collect()),
            matrix: Some(matrix),
        }
    }

    #[test]
    fn synergy_bands() {
        let k = MatrixKind::Synergy;
        assert_eq!(k.band(6.0), Band::StrongPositive);
        assert_eq!(k.band(5.0), Band::Positive);
        assert_eq!(k.band(2.5), Band::Positive);
        assert_eq!(k.band(2.0), Band::Neutral);
        assert_eq!(k.band(-2.0), Band::Neutral);
        assert_eq!(k.band(-3.0), Band::Negative);
        assert_eq!(k.band(-5.5), Band::StrongNegative);
    }

    #[test]
    fn matchup_bands() {
        let k = MatrixKind::Matchup;
        assert_eq!(k.band(56.0), Band::StrongPositive);
        assert_eq!(k.band(53.0), Band::Positive);
        assert_eq!(k.band(50.0), Band::Neutral);
        assert_eq!(k.band(47.0), Band::Negative);
        assert_eq!(k.band(44.9), Band::StrongNegative);
        assert_eq!(k.format_value(56.0), "56%");
        assert_eq!(MatrixKind::Synergy.format_value(-2.5), "-2.5");
    }

    #[test]
    fn diagonal_is_always_a_dash() {
        let p = payload(
            &["Ahri", "Zed", "Lux"],
            vec![
                vec![0.0, 1.0, 2.0],
                vec![3.0, 0.0, 4.0],
                vec![5.0, 6.0, 99.0],
            ],
        );
        let html = matrix(MatrixKind::Synergy, &p, &RenderContext::default()).html;
        assert_eq!(html.matches(">-</td>").count(), 3);
        assert!(!html.contains(">99</td>"));
        assert_eq!(html.matches("<td").count(), 9);
    }

    #[test]
    fn matchup_cells_carry_percent_and_band() {
        let p = payload(&["Ahri", "Zed"], vec![vec![50.0, 56.0], vec![44.0, 50.0]]);
        let html = matrix(MatrixKind::Matchup, &p, &RenderContext::default()).html;
        assert!(html.contains(r#"bg-green-100 text-green-800">56%</td>"#));
        assert!(html.contains(r#"bg-red-100 text-red-800">44%</td>"#));
        assert!(html.contains("img/champion/Zed.png"));
    }

    #[test]
    fn malformed_payloads_render_placeholder() {
        let ctx = RenderContext::default();
        let missing = MatrixPayload::default();
        assert!(matrix(MatrixKind::Synergy, &missing, &ctx)
            .html
            .contains(SYNERGY_UNAVAILABLE));

        let ragged = payload(&["Ahri", "Zed"], vec![vec![0.0, 1.0], vec![2.0]]);
        assert!(!is_square(&ragged));
        assert!(matrix(MatrixKind::Matchup, &ragged, &ctx)
            .html
            .contains(MATCHUP_UNAVAILABLE));
    }
}
