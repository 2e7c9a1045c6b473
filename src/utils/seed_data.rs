// crsp-service/src/utils/seed_data.rs
use crate::models::{Event, EventCategory, Member, Resource, ResourceKind};
use crate::utils::catalog::Catalog;

// Reference lists for the filter and entry forms
pub const ACADEMIC_YEARS: [&str; 3] = ["Licence 1", "Licence 2", "Licence 3"];
pub const SEMESTERS: [&str; 6] = [
    "Semestre 1",
    "Semestre 2",
    "Semestre 3",
    "Semestre 4",
    "Semestre 5",
    "Semestre 6",
];

// Shared application state: one catalog per collection, seeded at startup
// and injected into the handlers. Nothing is persisted.
#[derive(Clone)]
pub struct AppData {
    pub resources: Catalog<Resource>,
    pub events: Catalog<Event>,
    pub members: Catalog<Member>,
}

impl AppData {
    pub fn seeded() -> Self {
        Self {
            resources: Catalog::seeded(seed_resources()),
            events: Catalog::seeded(seed_events()),
            members: Catalog::seeded(seed_members()),
        }
    }
}

pub fn seed_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".to_string(),
            title: "Biologie Végétale - Examen Final".to_string(),
            year: "Licence 1".to_string(),
            semester: "Semestre 1".to_string(),
            subject: "Biologie".to_string(),
            kind: ResourceKind::Epreuve,
            date_added: "2023-11-15".to_string(),
            download_url: "#".to_string(),
        },
        Resource {
            id: "2".to_string(),
            title: "Chimie Organique - Corrigé TD2".to_string(),
            year: "Licence 1".to_string(),
            semester: "Semestre 2".to_string(),
            subject: "Chimie".to_string(),
            kind: ResourceKind::Corrige,
            date_added: "2023-12-10".to_string(),
            download_url: "#".to_string(),
        },
        Resource {
            id: "3".to_string(),
            title: "Statistiques Agricoles - Partiel".to_string(),
            year: "Licence 2".to_string(),
            semester: "Semestre 3".to_string(),
            subject: "Mathématiques".to_string(),
            kind: ResourceKind::Epreuve,
            date_added: "2024-01-20".to_string(),
            download_url: "#".to_string(),
        },
        Resource {
            id: "4".to_string(),
            title: "Agronomie Générale - Synthèse".to_string(),
            year: "Licence 3".to_string(),
            semester: "Semestre 5".to_string(),
            subject: "Agronomie".to_string(),
            kind: ResourceKind::Corrige,
            date_added: "2024-02-05".to_string(),
            download_url: "#".to_string(),
        },
    ]
}

pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Lancement de \"Mon Calculateur\"".to_string(),
            date: "15 Mars 2024".to_string(),
            description: "Une révolution pour le suivi académique. Découvrez notre nouvel outil logiciel conçu par le CRSP pour aider les étudiants à simuler et suivre leurs moyennes.".to_string(),
            image_url: "https://picsum.photos/800/600?random=1".to_string(),
            category: EventCategory::Innovation,
        },
        Event {
            id: "2".to_string(),
            title: "Conférence sur l'Agriculture Durable".to_string(),
            date: "10 Février 2024".to_string(),
            description: "Une rencontre enrichissante avec des experts du domaine pour discuter des défis de l'agriculture moderne au Bénin.".to_string(),
            image_url: "https://picsum.photos/800/600?random=2".to_string(),
            category: EventCategory::Evenement,
        },
        Event {
            id: "3".to_string(),
            title: "Atelier de Rédaction Scientifique".to_string(),
            date: "05 Janvier 2024".to_string(),
            description: "Formation pratique pour les étudiants en fin de cycle sur la structuration et la rédaction de mémoires.".to_string(),
            image_url: "https://picsum.photos/800/600?random=3".to_string(),
            category: EventCategory::Formation,
        },
    ]
}

pub fn seed_members() -> Vec<Member> {
    vec![
        Member {
            id: "1".to_string(),
            name: "Jean Dupont".to_string(),
            role: "Président".to_string(),
            year: "2023-2024".to_string(),
            photo_url: "https://picsum.photos/200/200?random=4".to_string(),
        },
        Member {
            id: "2".to_string(),
            name: "Marie Curie".to_string(),
            role: "Secrétaire Générale".to_string(),
            year: "2023-2024".to_string(),
            photo_url: "https://picsum.photos/200/200?random=5".to_string(),
        },
        Member {
            id: "3".to_string(),
            name: "Albert Einstein".to_string(),
            role: "Responsable Innovation".to_string(),
            year: "2022-2023".to_string(),
            photo_url: "https://picsum.photos/200/200?random=6".to_string(),
        },
        Member {
            id: "4".to_string(),
            name: "Isaac Newton".to_string(),
            role: "Responsable Communication".to_string(),
            year: "2022-2023".to_string(),
            photo_url: "https://picsum.photos/200/200?random=7".to_string(),
        },
    ]
}
