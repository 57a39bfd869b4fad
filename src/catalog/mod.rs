//! Marketplace catalogue
//!
//! The bond offerings listed on the marketplace. The list is static and
//! shared by the listing page and the investment flow.

use once_cell::sync::Lazy;

use crate::models::Project;

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: 1,
            name: "Delhi-Mumbai Smart Expressway".to_string(),
            authority: "NHAI".to_string(),
            roi: "12.4% Fixed".to_string(),
            min_invest: "5,000".to_string(),
            impact: "857M kg CO2 Reduction".to_string(),
            tag: "Green Transport".to_string(),
            details: "8-lane motorway with integrated solar lighting and EV charging stations. AI-powered incident detection.".to_string(),
        },
        Project {
            id: 2,
            name: "North Delhi Solar Microgrid".to_string(),
            authority: "Tata Power-DDL".to_string(),
            roi: "14.2% Variable".to_string(),
            min_invest: "2,500".to_string(),
            impact: "2MW Clean Energy".to_string(),
            tag: "Renewable Energy".to_string(),
            details: "Blockchain-enabled peer-to-peer solar trading for 150+ residential meters using smart grid technology.".to_string(),
        },
        Project {
            id: 3,
            name: "Indore Municipal Green Bond".to_string(),
            authority: "Indore Municipal Corp".to_string(),
            roi: "8.25% Tax-Free".to_string(),
            min_invest: "1,000".to_string(),
            impact: "Zero-Waste Urban Initiative".to_string(),
            tag: "Smart City".to_string(),
            details: "Funding for 60MW captive solar plant. India's first municipal green bond for retail investors.".to_string(),
        },
    ]
});

/// All listed projects in display order
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
