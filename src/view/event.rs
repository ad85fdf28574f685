use super::state::Page;
use crate::api::Request;

/// A user interaction, whichever surface it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// First paint: version header plus the champions page.
    Init,
    Navigate(Page),
    SelectPage(u32),
    ChangeType(String),
    ChangeSort(String),
    SearchInput(String),
    OpenChampion(String),
    SelectSearchResult(String),
    CloseModal,
    DismissSearch,
}

/// What a transition asks the controller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MarkActive(Page),
    ClearPagination,
    ShowTeamBuilder,
    SetSearchInput(String),
    ClearSearchInput,
    HideSearchResults,
    CloseModal,
    Fetch(Request),
}
