use super::{Binding, View};
use crate::api::models::Pagination;
use crate::view::event::Event;

const WINDOW: u32 = 2;

/// One slot of the pagination control, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Prev { target: u32, enabled: bool },
    Page { number: u32, current: bool },
    Ellipsis,
    Next { target: u32, enabled: bool },
}

pub fn page_target(page: u32) -> String {
    format!("page:{}", page)
}

/// Page 1, the last page and everything within two of the current page;
/// an ellipsis marks a skipped page exactly three away from current.
pub fn page_window(current: u32, total: u32) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }

    let mut slots = vec![PageSlot::Prev {
        target: current.saturating_sub(1).max(1),
        enabled: current != 1,
    }];

    for i in 1..=total {
        if i == 1 || i == total || i.abs_diff(current) <= WINDOW {
            slots.push(PageSlot::Page {
                number: i,
                current: i == current,
            });
        } else if i.abs_diff(current) == WINDOW + 1 {
            slots.push(PageSlot::Ellipsis);
        }
    }

    slots.push(PageSlot::Next {
        target: (current + 1).min(total),
        enabled: current != total,
    });

    slots
}

pub fn pagination(pagination: Option<&Pagination>) -> View {
    let Some(p) = pagination else {
        return View::empty();
    };

    if p.total_pages == 0 {
        return View::empty();
    }
    let slots = page_window(p.current_page.clamp(1, p.total_pages), p.total_pages);

    let mut html = String::new();
    let mut bindings = Vec::new();

    for slot in slots {
        match slot {
            PageSlot::Prev { target, enabled } => {
                html.push_str(&arrow_button(target, enabled, "fa-chevron-left"));
                if enabled {
                    bindings.push(Binding::new(page_target(target), Event::SelectPage(target)));
                }
            }
            PageSlot::Next { target, enabled } => {
                html.push_str(&arrow_button(target, enabled, "fa-chevron-right"));
                if enabled {
                    bindings.push(Binding::new(page_target(target), Event::SelectPage(target)));
                }
            }
            PageSlot::Page { number, current } => {
                let style = if current {
                    "bg-blue-500 text-white"
                } else {
                    "bg-white hover:bg-gray-100"
                };
                let aria = if current { r#" aria-current="page""# } else { "" };
                html.push_str(&format!(
                    r#"
<button class="px-3 py-1 rounded-md border {style}" data-page="{number}" data-target="{target}"{aria}>{number}</button>"#,
                    style = style,
                    number = number,
                    target = page_target(number),
                    aria = aria,
                ));
                bindings.push(Binding::new(page_target(number), Event::SelectPage(number)));
            }
            PageSlot::Ellipsis => html.push_str("\n<span class=\"px-2\">...</span>"),
        }
    }

    // Prev/Next point at pages that also have their own button.
    let mut seen = Vec::new();
    bindings.retain(|b| {
        if seen.contains(&b.target) {
            false
        } else {
            seen.push(b.target.clone());
            true
        }
    });

    View::with_bindings(html, bindings)
}

fn arrow_button(target: u32, enabled: bool, icon: &str) -> String {
    if enabled {
        format!(
            r#"
<button class="px-3 py-1 rounded-md border bg-white hover:bg-gray-100" data-page="{target}" data-target="{binding}"><i class="fas {icon}"></i></button>"#,
            target = target,
            binding = page_target(target),
            icon = icon,
        )
    } else {
        format!(
            r#"
<button class="px-3 py-1 rounded-md border bg-gray-100 text-gray-400 cursor-not-allowed" disabled data-page="{target}"><i class="fas {icon}"></i></button>"#,
            target = target,
            icon = icon,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn numbers(slots: &[PageSlot]) -> Vec<u32> {
        slots
            .iter()
            .filter_map(|s| match s {
                PageSlot::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn window_around_middle_page() {
        let slots = page_window(5, 10);
        assert_eq!(numbers(&slots), vec![1, 3, 4, 5, 6, 7, 10]);
        assert_eq!(
            slots,
            vec![
                PageSlot::Prev { target: 4, enabled: true },
                PageSlot::Page { number: 1, current: false },
                PageSlot::Ellipsis,
                PageSlot::Page { number: 3, current: false },
                PageSlot::Page { number: 4, current: false },
                PageSlot::Page { number: 5, current: true },
                PageSlot::Page { number: 6, current: false },
                PageSlot::Page { number: 7, current: false },
                PageSlot::Ellipsis,
                PageSlot::Page { number: 10, current: false },
                PageSlot::Next { target: 6, enabled: true },
            ]
        );
    }

    #[test]
    fn exactly_one_current_page() {
        for total in 1..=12 {
            for current in 1..=total {
                let slots = page_window(current, total);
                let currents: Vec<_> = slots
                    .iter()
                    .filter(|s| matches!(s, PageSlot::Page { current: true, .. }))
                    .collect();
                assert_eq!(currents.len(), 1, "current={} total={}", current, total);
                assert_eq!(
                    currents[0],
                    &PageSlot::Page { number: current, current: true }
                );
            }
        }
    }

    #[test]
    fn prev_and_next_enablement() {
        let first = page_window(1, 3);
        assert_eq!(first[0], PageSlot::Prev { target: 1, enabled: false });
        assert_eq!(first[first.len() - 1], PageSlot::Next { target: 2, enabled: true });

        let last = page_window(3, 3);
        assert_eq!(last[0], PageSlot::Prev { target: 2, enabled: true });
        assert_eq!(last[last.len() - 1], PageSlot::Next { target: 3, enabled: false });

        let single = page_window(1, 1);
        assert_eq!(numbers(&single), vec![1]);
        assert!(matches!(single[0], PageSlot::Prev { enabled: false, .. }));
        assert!(matches!(single[2], PageSlot::Next { enabled: false, .. }));
    }

    #[test]
    fn no_ellipsis_next_to_first_page() {
        // Page 1 is three away from 4 but is always a real button.
        let slots = page_window(4, 10);
        assert_eq!(numbers(&slots), vec![1, 2, 3, 4, 5, 6, 10]);
        assert_eq!(slots.iter().filter(|s| **s == PageSlot::Ellipsis).count(), 1);
    }

    #[test]
    fn disabled_buttons_get_no_binding() {
        let view = pagination(Some(&Pagination {
            current_page: 1,
            total_pages: 3,
            total_items: None,
        }));
        assert_eq!(view.html.matches("disabled").count(), 1);
        assert!(view.html.contains(r#"aria-current="page""#));
        let targets: Vec<_> = view.bindings.iter().map(|b| b.target.as_str()).collect();
        assert_eq!(targets, vec!["page:1", "page:2", "page:3"]);
    }

    #[test]
    fn missing_pagination_renders_nothing() {
        assert!(pagination(None).is_empty());
        let zero = Pagination {
            current_page: 1,
            total_pages: 0,
            total_items: None,
        };
        assert!(pagination(Some(&zero)).is_empty());
    }
}
