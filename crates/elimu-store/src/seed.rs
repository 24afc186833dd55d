// SPDX-License-Identifier: Apache-2.0

//! Seed data: the public site's course and service catalogs and the mock
//! payment ledger. Students and contacts always start empty.

use elimu_model::{Course, Payment, PaymentStatus, Service};

#[must_use]
pub fn default_courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "HIV (VCT) Counselling and Testing".to_string(),
            kind: "Short Course".to_string(),
            description: "Professional training in HIV counselling and testing procedures, \
                          following national guidelines and best practices."
                .to_string(),
            duration: "3 months".to_string(),
            certification: "Certificate".to_string(),
            prerequisites: Some("Basic healthcare knowledge".to_string()),
            fee: "KSH 15,000".to_string(),
        },
        Course {
            id: 2,
            title: "Adherence Counselling".to_string(),
            kind: "Certificate Course".to_string(),
            description: "Specialized training in adherence counselling techniques for chronic \
                          disease management."
                .to_string(),
            duration: "2 months".to_string(),
            certification: "Certificate".to_string(),
            prerequisites: Some("Healthcare background preferred".to_string()),
            fee: "KSH 12,000".to_string(),
        },
        Course {
            id: 3,
            title: "Diploma in Counselling".to_string(),
            kind: "Diploma Program".to_string(),
            description: "Comprehensive counselling program covering theory, practice, and \
                          ethics in professional counselling."
                .to_string(),
            duration: "12 months".to_string(),
            certification: "Diploma".to_string(),
            prerequisites: Some("High school certificate".to_string()),
            fee: "KSH 45,000".to_string(),
        },
        Course {
            id: 4,
            title: "Primary Guidance".to_string(),
            kind: "Certificate Course".to_string(),
            description: "Training in primary school guidance and counselling techniques for \
                          educational settings."
                .to_string(),
            duration: "4 months".to_string(),
            certification: "Certificate".to_string(),
            prerequisites: Some("Teaching experience preferred".to_string()),
            fee: "KSH 18,000".to_string(),
        },
        Course {
            id: 5,
            title: "Kenya Sign Language".to_string(),
            kind: "Certificate Course".to_string(),
            description: "Professional training in Kenya Sign Language for inclusive \
                          communication and accessibility."
                .to_string(),
            duration: "6 months".to_string(),
            certification: "Certificate".to_string(),
            prerequisites: None,
            fee: "KSH 20,000".to_string(),
        },
        Course {
            id: 6,
            title: "ECDE".to_string(),
            kind: "Certificate & Diploma".to_string(),
            description: "Early Childhood Development and Education program for aspiring early \
                          childhood educators."
                .to_string(),
            duration: "Certificate: 6 months, Diploma: 18 months".to_string(),
            certification: "Certificate/Diploma".to_string(),
            prerequisites: Some("High school certificate".to_string()),
            fee: "Certificate: KSH 25,000, Diploma: KSH 60,000".to_string(),
        },
    ]
}

#[must_use]
pub fn default_services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            title: "Psychological Counselling".to_string(),
            description: "Individual sessions with trained counsellors for stress, anxiety, \
                          and personal growth."
                .to_string(),
            audience: "Adults and young people".to_string(),
            fee: "KSH 1,500 per session".to_string(),
        },
        Service {
            id: 2,
            title: "Family & Marriage Therapy".to_string(),
            description: "Guided therapy sessions for couples and families working through \
                          conflict and communication."
                .to_string(),
            audience: "Couples and families".to_string(),
            fee: "KSH 2,500 per session".to_string(),
        },
        Service {
            id: 3,
            title: "HIV Counselling & Testing".to_string(),
            description: "Confidential voluntary counselling and testing with pre- and \
                          post-test support."
                .to_string(),
            audience: "Walk-in clients".to_string(),
            fee: "Free".to_string(),
        },
        Service {
            id: 4,
            title: "Adolescent Play Therapy".to_string(),
            description: "Play-based therapeutic sessions for children and adolescents."
                .to_string(),
            audience: "Ages 6-17".to_string(),
            fee: "KSH 1,800 per session".to_string(),
        },
        Service {
            id: 5,
            title: "Grief & Trauma Counselling".to_string(),
            description: "Support for individuals and groups processing loss and traumatic \
                          events."
                .to_string(),
            audience: "Individuals and groups".to_string(),
            fee: "KSH 2,000 per session".to_string(),
        },
        Service {
            id: 6,
            title: "Student Counselling".to_string(),
            description: "Academic and personal counselling for enrolled students."
                .to_string(),
            audience: "Enrolled students".to_string(),
            fee: "Included in tuition".to_string(),
        },
    ]
}

#[must_use]
pub fn mock_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: 1,
            student_name: "John Doe".to_string(),
            course: "HIV (VCT) Counselling".to_string(),
            amount_ksh: 15_000,
            mpesa_code: "QGH7YT8X9Z".to_string(),
            paid_on: "2024-01-15".to_string(),
            status: PaymentStatus::Confirmed,
            phone: "0722123456".to_string(),
        },
        Payment {
            id: 2,
            student_name: "Jane Smith".to_string(),
            course: "Diploma in Counselling".to_string(),
            amount_ksh: 45_000,
            mpesa_code: "RFJ8KL2M3N".to_string(),
            paid_on: "2024-01-14".to_string(),
            status: PaymentStatus::Confirmed,
            phone: "0733987654".to_string(),
        },
        Payment {
            id: 3,
            student_name: "Peter Wilson".to_string(),
            course: "ECDE Certificate".to_string(),
            amount_ksh: 25_000,
            mpesa_code: "STU9VW4X5Y".to_string(),
            paid_on: "2024-01-13".to_string(),
            status: PaymentStatus::Pending,
            phone: "0711456789".to_string(),
        },
    ]
}
