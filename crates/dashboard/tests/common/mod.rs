//! Shared fixtures for dashboard integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use mission_common::{ApodImage, MediaType, Photo, Rover, RoverManifest, Sol};
use mission_dashboard::{ClientError, DataGateway, Result};

pub fn manifest(name: &str, max_sol: Sol) -> RoverManifest {
    RoverManifest {
        name: name.to_string(),
        status: if name == "Curiosity" { "active" } else { "complete" }.to_string(),
        landing_date: NaiveDate::from_ymd_opt(2012, 8, 6).unwrap(),
        launch_date: NaiveDate::from_ymd_opt(2011, 11, 26).unwrap(),
        max_sol,
        max_date: NaiveDate::from_ymd_opt(2019, 9, 28).unwrap(),
        total_photos: 1000,
    }
}

pub fn roster() -> Vec<RoverManifest> {
    vec![
        manifest("Curiosity", 2540),
        manifest("Opportunity", 5111),
        manifest("Spirit", 2208),
    ]
}

pub fn apod() -> ApodImage {
    ApodImage {
        media_type: MediaType::Image,
        url: "https://apod.nasa.gov/apod/image/m31.jpg".to_string(),
        title: "Andromeda".to_string(),
        explanation: "The nearest large galaxy".to_string(),
    }
}

pub fn photo(id: u64) -> Photo {
    Photo {
        id,
        img_src: format!("http://mars.jpl.nasa.gov/msl/{}.jpg", id),
        earth_date: NaiveDate::from_ymd_opt(2019, 9, 28).unwrap(),
    }
}

/// In-memory gateway that counts calls per endpoint
#[derive(Default)]
pub struct CountingGateway {
    pub manifest_calls: AtomicUsize,
    pub apod_calls: AtomicUsize,
    pub photo_calls: Mutex<Vec<(Rover, Sol)>>,
    /// Photos per sol; sols not listed have none
    pub photos: HashMap<Sol, Vec<Photo>>,
    pub fail_manifest: bool,
}

impl CountingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_photos(mut self, sol: Sol, photos: Vec<Photo>) -> Self {
        self.photos.insert(sol, photos);
        self
    }

    pub fn failing_manifest() -> Self {
        Self {
            fail_manifest: true,
            ..Self::default()
        }
    }

    pub fn manifest_calls(&self) -> usize {
        self.manifest_calls.load(Ordering::SeqCst)
    }

    pub fn apod_calls(&self) -> usize {
        self.apod_calls.load(Ordering::SeqCst)
    }

    pub fn photo_calls(&self) -> Vec<(Rover, Sol)> {
        self.photo_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataGateway for CountingGateway {
    async fn image_of_the_day(&self) -> Result<ApodImage> {
        self.apod_calls.fetch_add(1, Ordering::SeqCst);
        Ok(apod())
    }

    async fn rover_manifests(&self) -> Result<Vec<RoverManifest>> {
        self.manifest_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_manifest {
            return Err(ClientError::HttpError {
                url: "http://localhost:3000/roverData/manifests".to_string(),
                status: 502,
                message: Some("upstream unavailable".to_string()),
            }
            .into());
        }
        Ok(roster())
    }

    async fn rover_photos(&self, rover: Rover, sol: Sol) -> Result<Vec<Photo>> {
        self.photo_calls.lock().unwrap().push((rover, sol));
        Ok(self.photos.get(&sol).cloned().unwrap_or_default())
    }
}
