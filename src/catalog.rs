use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Handle the web layer carries as router state. Handlers take the lock for
/// the duration of a single lookup or mutation and never hold it across an
/// await point.
pub type SharedCatalog = Arc<RwLock<Catalog>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Not enforced on signup.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Every activity the running process knows about, keyed by display name.
///
/// Seeded once at startup; activities are never added or removed afterwards.
/// Only the participant rosters change, via [`Catalog::signup`] and
/// [`Catalog::unregister`].
#[derive(Debug, Clone)]
pub struct Catalog {
    activities: HashMap<String, Activity>,
}

impl Catalog {
    pub fn seeded() -> Self {
        let mut activities = HashMap::new();

        activities.insert(
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        );
        activities.insert(
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        );
        activities.insert(
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        );
        activities.insert(
            "Soccer Team".to_string(),
            activity(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        );
        activities.insert(
            "Basketball Team".to_string(),
            activity(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        );
        activities.insert(
            "Art Club".to_string(),
            activity(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        );
        activities.insert(
            "Drama Club".to_string(),
            activity(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        );
        activities.insert(
            "Math Club".to_string(),
            activity(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 7:15 AM - 8:00 AM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        );
        activities.insert(
            "Debate Team".to_string(),
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        );

        Self { activities }
    }

    pub fn shared() -> SharedCatalog {
        Arc::new(RwLock::new(Self::seeded()))
    }

    pub fn activities(&self) -> &HashMap<String, Activity> {
        &self.activities
    }

    /// Adds `email` to the roster of `name`.
    ///
    /// Checked in order: unknown activity is a not-found error, an email
    /// already on the roster is a bad request. Either check failing leaves
    /// the catalog untouched.
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), ApiError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(ApiError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(ApiError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the roster of `name`. Unknown activity and
    /// unknown email both surface as not-found, with distinct details.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<(), ApiError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or(ApiError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ApiError::NotRegistered)?;

        activity.participants.remove(position);
        Ok(())
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rosters_are_non_empty_and_unique() {
        let catalog = Catalog::seeded();

        for (name, activity) in catalog.activities() {
            assert!(
                !activity.participants.is_empty(),
                "{name} seeded without participants"
            );

            let mut emails = activity.participants.clone();
            emails.sort();
            emails.dedup();
            assert_eq!(
                emails.len(),
                activity.participants.len(),
                "{name} seeded with duplicate participants"
            );
        }
    }

    #[test]
    fn signup_appends_new_participant() {
        let mut catalog = Catalog::seeded();

        catalog
            .signup("Chess Club", "newstudent@mergington.edu")
            .unwrap();

        let roster = &catalog.activities()["Chess Club"].participants;
        assert!(roster.contains(&"newstudent@mergington.edu".to_string()));
    }

    #[test]
    fn signup_rejects_duplicate_email() {
        let mut catalog = Catalog::seeded();
        let before = catalog.activities()["Chess Club"].participants.len();

        let err = catalog
            .signup("Chess Club", "michael@mergington.edu")
            .unwrap_err();

        assert_eq!(err, ApiError::AlreadySignedUp);
        assert_eq!(
            catalog.activities()["Chess Club"].participants.len(),
            before
        );
    }

    #[test]
    fn signup_rejects_unknown_activity() {
        let mut catalog = Catalog::seeded();

        let err = catalog
            .signup("Unknown Club", "student@mergington.edu")
            .unwrap_err();

        assert_eq!(err, ApiError::ActivityNotFound);
    }

    #[test]
    fn unregister_removes_participant_once() {
        let mut catalog = Catalog::seeded();

        catalog
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap();
        let roster = &catalog.activities()["Chess Club"].participants;
        assert!(!roster.contains(&"michael@mergington.edu".to_string()));

        let err = catalog
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap_err();
        assert_eq!(err, ApiError::NotRegistered);
    }

    #[test]
    fn unregister_rejects_unknown_activity() {
        let mut catalog = Catalog::seeded();

        let err = catalog
            .unregister("Unknown Club", "michael@mergington.edu")
            .unwrap_err();

        assert_eq!(err, ApiError::ActivityNotFound);
    }
}
