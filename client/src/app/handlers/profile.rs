//! # Profile Handlers
//!
//! Profile loading and the two member updates: profile fields and school
//! affiliation.

use std::sync::Arc;

use async_channel::Sender;
use shared::{Profile, ProfileUpdateRequest, UniversityRequest};

use crate::app::events::AppEvent;
use crate::app::handlers::auth::{fetch_member_info, report_api_error};
use crate::app::state::Notice;
use crate::app::store::Store;
use crate::core::error::{ApiError, AppError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::validate_email;

/// Fetch the profile, then its image from the storage server.
///
/// A missing image does not fail the load.
pub(crate) fn load_profile(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) {
    tokio::spawn(async move {
        let profile = api.get_profile().await;
        let image = match &profile {
            Ok(_) => match api.get_profile_image().await {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::debug!(error = %e, "No profile image");
                    None
                }
            },
            Err(_) => None,
        };
        let _ = event_tx
            .send(AppEvent::ProfileLoaded { profile, image })
            .await;
    });
}

pub(crate) fn handle_profile_loaded(
    store: &Store,
    profile: std::result::Result<Profile, ApiError>,
    image: Option<Vec<u8>>,
) {
    match profile {
        Ok(profile) => store.set_profile(Some(profile), image),
        Err(e) => {
            report_api_error(store, e);
        }
    }
}

/// Submit profile changes.
pub(crate) fn update_profile(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    request: ProfileUpdateRequest,
) -> Result<()> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    tokio::spawn(async move {
        let result = api.update_profile(request).await;
        let _ = event_tx.send(AppEvent::ProfileUpdated(result)).await;
    });
    Ok(())
}

pub(crate) fn handle_profile_updated(
    store: &Store,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    result: std::result::Result<(), ApiError>,
) {
    match result {
        Ok(()) => {
            store.notify(Notice::info("Profile updated."));
            load_profile(api, event_tx);
        }
        Err(e) => {
            report_api_error(store, e);
        }
    }
}

/// Submit the school name and school email.
pub(crate) fn update_university(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    request: UniversityRequest,
) -> Result<()> {
    if request.university.trim().is_empty() {
        return Err(AppError::Validation("School name is required".to_string()));
    }
    validate_email(&request.university_email).into_result()?;

    tokio::spawn(async move {
        let result = api.update_university(request).await;
        let _ = event_tx.send(AppEvent::UniversityUpdated(result)).await;
    });
    Ok(())
}

/// On success the member info is refetched so the new school shows up.
pub(crate) fn handle_university_updated(
    store: &Store,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    result: std::result::Result<(), ApiError>,
) {
    match result {
        Ok(()) => {
            store.notify(Notice::info("School verified."));
            fetch_member_info(api, event_tx);
        }
        Err(e) => {
            report_api_error(store, e);
        }
    }
}
