//! Fetch scheduling
//!
//! One task per missing requirement. A requirement stays in flight until its
//! result message has been handled, so repeated renders never duplicate a
//! request.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::gateway::DataGateway;
use crate::{
    application::requirements::Requirement,
    message::{AppMsg, Loaded},
};

pub struct FetchScheduler {
    gateway: Arc<dyn DataGateway>,
    sender: mpsc::UnboundedSender<AppMsg>,
    in_flight: HashSet<Requirement>,
}

impl FetchScheduler {
    pub fn new(gateway: Arc<dyn DataGateway>, sender: mpsc::UnboundedSender<AppMsg>) -> Self {
        Self {
            gateway,
            sender,
            in_flight: HashSet::new(),
        }
    }

    /// Start a fetch for every requirement not already outstanding.
    /// Returns how many were started.
    pub fn schedule(&mut self, requirements: BTreeSet<Requirement>) -> usize {
        let mut started = 0;
        for requirement in requirements {
            if !self.in_flight.insert(requirement) {
                debug!(%requirement, "Already in flight");
                continue;
            }
            info!(%requirement, "Fetching");
            self.spawn(requirement);
            started += 1;
        }
        started
    }

    /// Mark `requirement` as settled, successfully or not
    pub fn complete(&mut self, requirement: &Requirement) {
        self.in_flight.remove(requirement);
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    fn spawn(&self, requirement: Requirement) {
        let gateway = Arc::clone(&self.gateway);
        let sender = self.sender.clone();

        tokio::spawn(async move {
            let msg = match fetch(&*gateway, requirement).await {
                Ok(loaded) => AppMsg::Loaded(loaded),
                Err(error) => AppMsg::FetchFailed {
                    requirement,
                    error: error.to_string(),
                },
            };
            if sender.send(msg).is_err() {
                warn!(%requirement, "Application stopped before fetch completed");
            }
        });
    }
}

async fn fetch(gateway: &dyn DataGateway, requirement: Requirement) -> crate::Result<Loaded> {
    Ok(match requirement {
        Requirement::Manifest => Loaded::Manifests(gateway.rover_manifests().await?),
        Requirement::ImageOfTheDay => Loaded::ImageOfTheDay(gateway.image_of_the_day().await?),
        Requirement::Photos(query) => Loaded::Photos {
            query,
            photos: gateway.rover_photos(query.rover, query.sol).await?,
        },
    })
}
