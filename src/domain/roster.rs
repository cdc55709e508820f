use crate::domain::model::{Availability, City, ConsultationMode, Doctor};

/// The static reference roster: six doctors across the two supported cities.
pub fn sample_roster() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "1".into(),
            name: "Dr. Asha Rawat".into(),
            specialization: "General Physician".into(),
            city: City::Dehradun,
            experience_years: 8,
            rating: 4.8,
            languages: vec!["Hindi".into(), "English".into()],
            availability: Availability::Online,
            consultation_modes: vec![
                ConsultationMode::Video,
                ConsultationMode::Phone,
                ConsultationMode::InPerson,
            ],
            phone: "+91-9876543210".into(),
            photo_url: None,
        },
        Doctor {
            id: "2".into(),
            name: "Dr. Manoj Joshi".into(),
            specialization: "Family Doctor".into(),
            city: City::Haldwani,
            experience_years: 12,
            rating: 4.6,
            languages: vec!["Hindi".into(), "Garhwali".into()],
            availability: Availability::Online,
            consultation_modes: vec![ConsultationMode::Phone, ConsultationMode::InPerson],
            phone: "+91-9876543211".into(),
            photo_url: None,
        },
        Doctor {
            id: "3".into(),
            name: "Dr. Meena Kapoor".into(),
            specialization: "Gastroenterologist".into(),
            city: City::Dehradun,
            experience_years: 15,
            rating: 4.9,
            languages: vec!["Hindi".into(), "English".into()],
            availability: Availability::Online,
            consultation_modes: vec![ConsultationMode::Video, ConsultationMode::InPerson],
            phone: "+91-9876543212".into(),
            photo_url: None,
        },
        Doctor {
            id: "4".into(),
            name: "Dr. Dinesh Pandey".into(),
            specialization: "Cardiologist".into(),
            city: City::Haldwani,
            experience_years: 10,
            rating: 4.7,
            languages: vec!["Hindi".into(), "English".into(), "Garhwali".into()],
            availability: Availability::Busy,
            consultation_modes: vec![ConsultationMode::Video, ConsultationMode::Phone],
            phone: "+91-9876543213".into(),
            photo_url: None,
        },
        Doctor {
            id: "5".into(),
            name: "Dr. Priya Sharma".into(),
            specialization: "Pediatrician".into(),
            city: City::Dehradun,
            experience_years: 7,
            rating: 4.8,
            languages: vec!["Hindi".into(), "English".into()],
            availability: Availability::Online,
            consultation_modes: vec![
                ConsultationMode::Video,
                ConsultationMode::Phone,
                ConsultationMode::InPerson,
            ],
            phone: "+91-9876543214".into(),
            photo_url: None,
        },
        Doctor {
            id: "6".into(),
            name: "Dr. Rajesh Kumar".into(),
            specialization: "Orthopedic".into(),
            city: City::Haldwani,
            experience_years: 14,
            rating: 4.5,
            languages: vec!["Hindi".into(), "English".into()],
            availability: Availability::Offline,
            consultation_modes: vec![ConsultationMode::InPerson],
            phone: "+91-9876543215".into(),
            photo_url: None,
        },
    ]
}
