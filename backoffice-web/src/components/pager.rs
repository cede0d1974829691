use i18nrs::yew::use_translation;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Page sizes offered by the size selector.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Page numbers to render around `current`, with `None` marking a gap.
///
/// Shows the first `edge` and last `edge` pages plus `around` pages on each
/// side of the current one.
pub fn page_window(total_pages: u32, current: u32, edge: u32, around: u32) -> Vec<Option<u32>> {
    if total_pages == 0 {
        return Vec::new();
    }
    // Widened so `total + 1` cannot overflow.
    let total = u64::from(total_pages);
    let current = u64::from(current.clamp(1, total_pages));
    let (edge, around) = (u64::from(edge), u64::from(around));
    let mut pages = Vec::new();

    let left_end = (1 + edge).min(total + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current.saturating_sub(around));
    let mid_end = (current + around + 1).min(total + 1);
    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total.saturating_sub(edge) + 1);
    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total).map(Some));

    pages
        .into_iter()
        .map(|page| page.and_then(|page| u32::try_from(page).ok()))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_records: u64,
    pub on_page: Callback<u32>,
    pub on_page_size: Callback<u32>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let (i18n, ..) = use_translation();
    let current = props.page_number;

    let page_button = |page: Option<u32>| -> Html {
        match page {
            None => html! { <button class="join-item btn btn-sm btn-disabled">{"…"}</button> },
            Some(page) => {
                let on_page = props.on_page.clone();
                let active = if page == current { "btn-active" } else { "" };
                html! {
                    <button
                        class={classes!("join-item", "btn", "btn-sm", active)}
                        onclick={Callback::from(move |_| on_page.emit(page))}
                    >
                        {page.to_string()}
                    </button>
                }
            }
        }
    };

    let on_size_change = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(size) = select.value().parse::<u32>() {
                    on_page_size.emit(size);
                }
            }
        })
    };

    let previous = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(current.saturating_sub(1).max(1)))
    };
    let next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(current.saturating_add(1)))
    };

    html! {
        <div class="flex flex-wrap items-center justify-between gap-4 mt-4">
            <span class="text-sm text-base-content/70">
                { i18n.t("pager.total") }{": "}{props.total_records.to_string()}
            </span>
            <div class="join">
                <button class="join-item btn btn-sm" disabled={current <= 1} onclick={previous}>{"«"}</button>
                { for page_window(props.total_pages, current, 1, 2).into_iter().map(page_button) }
                <button class="join-item btn btn-sm" disabled={current >= props.total_pages} onclick={next}>{"»"}</button>
            </div>
            <label class="flex items-center gap-2 text-sm">
                { i18n.t("pager.page_size") }
                <select class="select select-bordered select-sm" onchange={on_size_change}>
                    { for PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == props.page_size}>{size.to_string()}</option>
                    }) }
                </select>
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pages() {
        assert!(page_window(0, 1, 1, 2).is_empty());
    }

    #[test]
    fn test_short_range_has_no_gaps() {
        assert_eq!(
            page_window(4, 2, 1, 2),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn test_gaps_on_both_sides() {
        assert_eq!(
            page_window(20, 10, 1, 2),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn test_current_beyond_total_is_clamped() {
        assert_eq!(
            page_window(5, 9, 1, 1),
            vec![Some(1), None, Some(4), Some(5)]
        );
    }

    #[test]
    fn test_huge_page_count_does_not_overflow() {
        assert_eq!(
            page_window(u32::MAX, u32::MAX, 1, 2),
            vec![Some(1), None, Some(u32::MAX - 2), Some(u32::MAX - 1), Some(u32::MAX)]
        );
        assert_eq!(
            page_window(u32::MAX, 1, 1, 2),
            vec![Some(1), Some(2), Some(3), None, Some(u32::MAX)]
        );
        assert_eq!(page_window(u32::MAX, 7, 0, 0), vec![None, Some(7), None]);
        assert_eq!(page_window(u32::MAX, 7, 1, 0), vec![Some(1), None, Some(7), None, Some(u32::MAX)]);
    }
}
