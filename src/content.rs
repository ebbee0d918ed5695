// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static facts about the clinic shown on the public site.
//!
//! Text that differs per language lives in the message catalogs; this module
//! holds what is the same in every language (numbers, addresses, links) and
//! the catalog keys that tie the two together.

use serde::Serialize;

pub const CLINIC_EMAIL: &str = "contact@zebekov.mk";

/// A clinic location. `key` selects `locations.{key}.*` in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub key: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub map_url: &'static str,
}

pub const LOCATIONS: [Location; 2] = [
    Location {
        key: "strumica",
        address: "Kiro Abrashev 32, 2400 Strumica",
        phone: "+389 70 515 734",
        phone_href: "tel:+38970515734",
        email: CLINIC_EMAIL,
        map_url: "https://www.google.com/maps/dir//Dental+Center+Zebekov+Kiro+Abrashev+32+Strumica+2400/@41.4312084,22.6457881,16z",
    },
    Location {
        key: "novoselo",
        address: "Marshal Tito 47, 2437 Novo Selo",
        phone: "+389 71 393 199",
        phone_href: "tel:+38971393199",
        email: CLINIC_EMAIL,
        map_url: "https://www.google.com/maps/dir//Dental+Center+Zebekov+Novo+Selo/@41.4127404,22.8820982,16z",
    },
];

/// Opening hours row. `hours` of `None` means closed.
#[derive(Debug, Clone, Serialize)]
pub struct WorkingHours {
    /// Catalog key under `contact.workingHours`
    pub day_key: &'static str,
    pub hours: Option<&'static str>,
}

pub const WORKING_HOURS: [WorkingHours; 3] = [
    WorkingHours {
        day_key: "mondayFriday",
        hours: Some("8:00 - 20:00"),
    },
    WorkingHours {
        day_key: "saturday",
        hours: Some("9:00 - 17:00"),
    },
    WorkingHours {
        day_key: "sunday",
        hours: None,
    },
];

/// Team member card. `key` selects `team.members.{key}` in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub key: &'static str,
    pub image: &'static str,
}

pub const TEAM: [TeamMember; 9] = [
    TeamMember { key: "toskoZebekov", image: "/images/doctors/toskoZebekov.jpg" },
    TeamMember { key: "gonceVasilevaKoleva", image: "/images/doctors/gonceVasileva.jpg" },
    TeamMember { key: "kirePopcev", image: "/images/doctors/kirePopcev.jpg" },
    TeamMember { key: "blagicaTrencev", image: "/images/doctors/blagicaTrencev.jpg" },
    TeamMember { key: "emilijaStojceva", image: "/images/doctors/emilijaStojceva.jpg" },
    TeamMember { key: "ljupcoBikovski", image: "/images/doctors/ljupcoBikovski.jpg" },
    TeamMember { key: "adrijanaKotev", image: "/images/doctors/adrijanaKotev.jpg" },
    TeamMember { key: "anaKacarska", image: "/images/doctors/anaKacarska.jpg" },
    TeamMember { key: "lenceZimbakova", image: "/images/doctors/lenceZimbakova.jpg" },
];

/// Service categories, in display order (`services.items.{key}`).
pub const SERVICE_KEYS: [&str; 6] = [
    "general",
    "cosmetic",
    "orthodontics",
    "implants",
    "prosthetics",
    "pediatric",
];

/// Headline numbers on the home page (`home.stats.{key}`).
pub const HOME_STATS: [(&str, u32); 4] = [
    ("years", 30),
    ("patients", 10_000),
    ("doctors", TEAM.len() as u32),
    ("locations", LOCATIONS.len() as u32),
];

/// Pages of the public site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Services,
    Locations,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Locations,
        Page::Contact,
    ];

    /// Path below the locale prefix.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Locations => "/locations",
            Page::Contact => "/contact",
        }
    }

    /// Catalog sections the page renders, besides the shared layout.
    pub fn sections(self) -> &'static [&'static str] {
        match self {
            Page::Home => &["home", "services", "team"],
            Page::About => &["about", "team"],
            Page::Services => &["services"],
            Page::Locations => &["locations"],
            Page::Contact => &["contact"],
        }
    }
}
