//! Demo records loaded into the in-memory store and shown by the admin
//! panels when the live store cannot be read. The Postgres migration inserts
//! the same rows.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    Customer, CustomerStatus, DocumentStatus, Lead, LeadStatus, Priority, Service, ServiceStatus,
    UploadedDocument,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CUST001".to_string(),
            name: "Rajesh Kumar".to_string(),
            phone: "9876543210".to_string(),
            email: "rajesh.kumar@email.com".to_string(),
            date: at(2024, 12, 15, 10, 30),
            status: CustomerStatus::Active,
            priority: Priority::High,
            services: strings(&["Company Registration", "GST Registration"]),
            total_spent: 20_000,
            last_service: Some("GST Registration".to_string()),
        },
        Customer {
            id: "CUST002".to_string(),
            name: "Priya Sharma".to_string(),
            phone: "9876543211".to_string(),
            email: "priya.sharma@email.com".to_string(),
            date: at(2024, 12, 18, 14, 20),
            status: CustomerStatus::Active,
            priority: Priority::Medium,
            services: strings(&["Trademark Registration"]),
            total_spent: 25_000,
            last_service: Some("Trademark Registration".to_string()),
        },
        Customer {
            id: "CUST003".to_string(),
            name: "Amit Patel".to_string(),
            phone: "9876543212".to_string(),
            email: "amit.patel@email.com".to_string(),
            date: at(2024, 12, 20, 9, 15),
            status: CustomerStatus::Active,
            priority: Priority::Low,
            services: strings(&["Company Registration", "Legal Documentation"]),
            total_spent: 35_000,
            last_service: Some("Legal Documentation".to_string()),
        },
    ]
}

pub fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "LEAD001".to_string(),
            name: "Rohit Gupta".to_string(),
            email: "rohit.gupta@email.com".to_string(),
            phone: "+91 9876543210".to_string(),
            service: "Company Registration".to_string(),
            budget: Some("₹10,000 - ₹20,000".to_string()),
            message: Some(
                "I want to register my startup as a Private Limited Company. Need complete assistance with documentation."
                    .to_string(),
            ),
            date: date(2025, 1, 15),
            status: LeadStatus::New,
            priority: Priority::Medium,
            business_type: Some("Technology Startup".to_string()),
        },
        Lead {
            id: "LEAD002".to_string(),
            name: "Sunita Mehta".to_string(),
            email: "sunita.mehta@email.com".to_string(),
            phone: "+91 9876543211".to_string(),
            service: "GST Registration".to_string(),
            budget: Some("₹3,000 - ₹5,000".to_string()),
            message: Some(
                "Need GST registration for my retail business. Already have company registration."
                    .to_string(),
            ),
            date: date(2025, 1, 14),
            status: LeadStatus::Contacted,
            priority: Priority::Low,
            business_type: Some("Retail".to_string()),
        },
        Lead {
            id: "LEAD003".to_string(),
            name: "Vikram Singh".to_string(),
            email: "vikram.singh@email.com".to_string(),
            phone: "+91 9876543212".to_string(),
            service: "Trademark Registration".to_string(),
            budget: Some("₹20,000 - ₹30,000".to_string()),
            message: Some(
                "Want to register trademark for my brand name and logo. Need complete trademark search and filing."
                    .to_string(),
            ),
            date: date(2025, 1, 13),
            status: LeadStatus::New,
            priority: Priority::Medium,
            business_type: Some("Manufacturing".to_string()),
        },
        Lead {
            id: "LEAD004".to_string(),
            name: "Anita Desai".to_string(),
            email: "anita.desai@email.com".to_string(),
            phone: "+91 9876543214".to_string(),
            service: "Legal Documentation".to_string(),
            budget: Some("₹8,000 - ₹15,000".to_string()),
            message: Some(
                "Need help with partnership deed and other legal documents for my consulting business."
                    .to_string(),
            ),
            date: date(2025, 1, 16),
            status: LeadStatus::New,
            priority: Priority::Medium,
            business_type: Some("Consulting".to_string()),
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "SRV001".to_string(),
            name: "Company Registration".to_string(),
            customer_id: "CUST001".to_string(),
            status: ServiceStatus::Completed,
            price: 15_000,
            description: "Private Limited Company registration with all legal documentation"
                .to_string(),
            start_date: date(2024, 12, 20),
            completed_date: Some(date(2024, 12, 25)),
            required_documents: strings(&[
                "PAN Card of Directors",
                "Aadhaar Card of Directors",
                "Address Proof",
                "Bank Statement",
                "Passport Size Photos",
            ]),
            certificates: strings(&[
                "Certificate of Incorporation",
                "Memorandum of Association (MOA)",
                "Articles of Association (AOA)",
                "PAN Card of Company",
                "TAN Certificate",
            ]),
            uploaded_documents: vec![
                UploadedDocument {
                    name: "PAN Card - Director 1".to_string(),
                    status: DocumentStatus::Verified,
                    upload_date: date(2024, 12, 15),
                },
                UploadedDocument {
                    name: "Aadhaar Card - Director 1".to_string(),
                    status: DocumentStatus::Verified,
                    upload_date: date(2024, 12, 15),
                },
                UploadedDocument {
                    name: "Address Proof".to_string(),
                    status: DocumentStatus::Verified,
                    upload_date: date(2024, 12, 16),
                },
            ],
        },
        Service {
            id: "SRV002".to_string(),
            name: "GST Registration".to_string(),
            customer_id: "CUST002".to_string(),
            status: ServiceStatus::Completed,
            price: 5_000,
            description: "GST registration and compliance setup".to_string(),
            start_date: date(2024, 12, 18),
            completed_date: Some(date(2024, 12, 22)),
            required_documents: strings(&[
                "Company Registration Certificate",
                "Bank Account Details",
                "Address Proof of Business",
                "Identity Proof of Authorized Signatory",
            ]),
            certificates: strings(&["GST Registration Certificate", "GST Login Credentials"]),
            uploaded_documents: vec![UploadedDocument {
                name: "Company Certificate".to_string(),
                status: DocumentStatus::Verified,
                upload_date: date(2024, 12, 18),
            }],
        },
        Service {
            id: "SRV003".to_string(),
            name: "Trademark Registration".to_string(),
            customer_id: "CUST003".to_string(),
            status: ServiceStatus::InProgress,
            price: 25_000,
            description: "Trademark search, filing and follow-up with the registry".to_string(),
            start_date: date(2025, 1, 5),
            completed_date: None,
            required_documents: strings(&["Brand Logo", "Identity Proof", "Usage Evidence"]),
            certificates: strings(&["Trademark Application Receipt"]),
            uploaded_documents: vec![
                UploadedDocument {
                    name: "Brand Logo".to_string(),
                    status: DocumentStatus::Verified,
                    upload_date: date(2025, 1, 5),
                },
                UploadedDocument {
                    name: "Identity Proof".to_string(),
                    status: DocumentStatus::Pending,
                    upload_date: date(2025, 1, 6),
                },
            ],
        },
        Service {
            id: "SRV004".to_string(),
            name: "Legal Documentation".to_string(),
            customer_id: "CUST001".to_string(),
            status: ServiceStatus::Completed,
            price: 10_000,
            description: "Partnership deed, agreements and board resolutions".to_string(),
            start_date: date(2024, 12, 10),
            completed_date: Some(date(2024, 12, 15)),
            required_documents: strings(&["Partner Details", "Draft Terms"]),
            certificates: strings(&["Registered Partnership Deed"]),
            uploaded_documents: Vec::new(),
        },
    ]
}
