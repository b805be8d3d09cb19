use crate::models::cv::{CvData, EducationEntry, ExperienceEntry};

/// Fixed CV used for template gallery thumbnails.
pub fn sample_cv() -> CvData {
    CvData {
        full_name: Some("Alex Morgan".to_string()),
        target_position: Some("Senior Product Designer".to_string()),
        email: Some("alex.morgan@example.com".to_string()),
        phone: Some("+44 20 7946 0958".to_string()),
        linkedin_url: Some("linkedin.com/in/alexmorgan".to_string()),
        location: Some("London, UK".to_string()),
        photo: None,
        summary: Some(
            "Product designer with eight years of experience shaping B2B and consumer \
             products, from early discovery to polished, accessible interfaces."
                .to_string(),
        ),
        skills: Some(
            "Figma, Design Systems, User Research, Prototyping, Accessibility, HTML & CSS"
                .to_string(),
        ),
        languages: Some("English — Native, French — Fluent, Spanish — Intermediate".to_string()),
        experiences: vec![
            ExperienceEntry {
                job_title: Some("Senior Product Designer".to_string()),
                company: Some("Northwind Labs".to_string()),
                location: Some("London".to_string()),
                start_date: Some("2021".to_string()),
                end_date: None,
                achievements: Some(
                    "Led the redesign of the onboarding flow, lifting activation by 18%\n\
                     Built and maintained a design system used by 6 product teams"
                        .to_string(),
                ),
            },
            ExperienceEntry {
                job_title: Some("Product Designer".to_string()),
                company: Some("Brightline".to_string()),
                location: Some("Manchester".to_string()),
                start_date: Some("2017".to_string()),
                end_date: Some("2021".to_string()),
                achievements: Some(
                    "Ran 40+ usability sessions to validate checkout changes\n\
                     Shipped a mobile app rated 4.7 on the App Store"
                        .to_string(),
                ),
            },
        ],
        education: vec![EducationEntry {
            degree: Some("BA Interaction Design".to_string()),
            university: Some("University of the Arts London".to_string()),
            location: Some("London".to_string()),
            start_date: Some("2013".to_string()),
            end_date: Some("2016".to_string()),
        }],
        template: None,
        style: None,
    }
}
