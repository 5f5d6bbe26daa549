//! Public enquiry forms: body parsing, spam screening and conversion into leads.

pub mod contact;
pub mod honeypot;
pub mod parser;
