//! Installable web-app manifest.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

/// Web-app manifest served at `/manifest.webmanifest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: &'static [ManifestIcon],
}

pub const APP_NAME: &str = "ElectroQuiz - Electronics Engineering Learning Platform";

pub const APP_DESCRIPTION: &str =
    "A comprehensive quiz and learning platform for Electronics Engineering (BE) students";

impl Default for AppManifest {
    fn default() -> Self {
        Self {
            name: APP_NAME,
            short_name: "ElectroQuiz",
            description: APP_DESCRIPTION,
            start_url: "/",
            display: "standalone",
            background_color: "#ffffff",
            theme_color: "#f59e0b",
            icons: &[
                ManifestIcon {
                    src: "/icon-192x192.png",
                    sizes: "192x192",
                    mime_type: "image/png",
                },
                ManifestIcon {
                    src: "/icon-512x512.png",
                    sizes: "512x512",
                    mime_type: "image/png",
                },
            ],
        }
    }
}
