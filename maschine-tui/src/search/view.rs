use crate::types::Profile;

use super::{format_count, SearchController, SearchState};

/// What the results area should show. Derived from the controller on every
/// frame, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Empty,
    Searching,
    Failed(String),
    NoUsers,
    Users(Vec<ProfileRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub fid: u64,
    /// `None` when the profile has no avatar; nothing is drawn in its place.
    pub avatar_url: Option<String>,
    pub name: String,
    pub handle: String,
    pub followers: String,
    pub following: String,
}

impl From<&Profile> for ProfileRow {
    fn from(profile: &Profile) -> Self {
        Self {
            fid: profile.fid,
            avatar_url: profile.avatar_url().map(str::to_string),
            name: profile.shown_name().to_string(),
            handle: format!("@{}", profile.username),
            followers: format_count(profile.follower_count),
            following: format_count(profile.following_count),
        }
    }
}

pub fn results_view(controller: &SearchController) -> ResultsView {
    match controller.state() {
        SearchState::Idle => ResultsView::Empty,
        SearchState::Loading => ResultsView::Searching,
        SearchState::Error(message) => ResultsView::Failed(message.clone()),
        SearchState::Success(profiles) if profiles.is_empty() => {
            if SearchController::is_searchable(controller.query()) {
                ResultsView::NoUsers
            } else {
                ResultsView::Empty
            }
        }
        SearchState::Success(profiles) => {
            ResultsView::Users(profiles.iter().map(ProfileRow::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchEvent, SearchOutcome};

    fn settled(query: &str, outcome: SearchOutcome) -> SearchController {
        let mut controller = SearchController::new();
        controller.update(SearchEvent::QueryChanged(query.to_string()));
        let seq = controller.latest_seq();
        controller.update(SearchEvent::Completed { seq, outcome });
        controller
    }

    #[test]
    fn idle_shows_nothing() {
        assert_eq!(results_view(&SearchController::new()), ResultsView::Empty);
    }

    #[test]
    fn loading_shows_searching() {
        let mut controller = SearchController::new();
        controller.update(SearchEvent::QueryChanged("vi".to_string()));
        assert_eq!(results_view(&controller), ResultsView::Searching);
    }

    #[test]
    fn failure_shows_message() {
        let controller = settled("vi", SearchOutcome::Failed);
        assert_eq!(
            results_view(&controller),
            ResultsView::Failed("Failed to search users".to_string())
        );
    }

    #[test]
    fn empty_success_shows_no_users() {
        let controller = settled("zzzz", SearchOutcome::Found(vec![]));
        assert_eq!(results_view(&controller), ResultsView::NoUsers);
    }

    #[test]
    fn rows_fall_back_to_username_and_skip_missing_avatar() {
        let controller = settled(
            "vi",
            SearchOutcome::Found(vec![
                Profile {
                    fid: 1,
                    username: "vitalik".to_string(),
                    display_name: Some("Vitalik".to_string()),
                    pfp_url: Some("https://i.imgur.com/v.png".to_string()),
                    follower_count: 500_000,
                    following_count: 100,
                },
                Profile {
                    fid: 9,
                    username: "vinny".to_string(),
                    display_name: None,
                    pfp_url: None,
                    follower_count: 1_500,
                    following_count: 2,
                },
            ]),
        );

        let ResultsView::Users(rows) = results_view(&controller) else {
            panic!("expected users");
        };
        assert_eq!(
            rows[0],
            ProfileRow {
                fid: 1,
                avatar_url: Some("https://i.imgur.com/v.png".to_string()),
                name: "Vitalik".to_string(),
                handle: "@vitalik".to_string(),
                followers: "500K".to_string(),
                following: "100".to_string(),
            }
        );
        assert_eq!(rows[1].name, "vinny");
        assert_eq!(rows[1].handle, "@vinny");
        assert_eq!(rows[1].avatar_url, None);
        assert_eq!(rows[1].followers, "1.5K");
    }
}
