//! Search and summary helpers shared by the admin API and dashboard views.

use crate::models::{Customer, Lead, Priority, Service, ServiceStatus};

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Normalize a search box value; blank means "no filter".
pub fn search_term(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty())
}

/// Case-insensitive match on name, id or phone.
pub fn customer_matches(customer: &Customer, term: &str) -> bool {
    contains(&customer.name, term) || contains(&customer.id, term) || contains(&customer.phone, term)
}

/// Case-insensitive match on name, email or requested service.
pub fn lead_matches(lead: &Lead, term: &str) -> bool {
    contains(&lead.name, term) || contains(&lead.email, term) || contains(&lead.service, term)
}

pub fn filter_customers(customers: Vec<Customer>, search: Option<&str>) -> Vec<Customer> {
    match search_term(search) {
        Some(term) => customers
            .into_iter()
            .filter(|c| customer_matches(c, &term))
            .collect(),
        None => customers,
    }
}

pub fn filter_leads(leads: Vec<Lead>, search: Option<&str>) -> Vec<Lead> {
    match search_term(search) {
        Some(term) => leads.into_iter().filter(|l| lead_matches(l, &term)).collect(),
        None => leads,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityStats {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityStats {
    pub fn tally(priorities: impl IntoIterator<Item = Priority>) -> Self {
        let mut stats = Self::default();
        for priority in priorities {
            match priority {
                Priority::High => stats.high += 1,
                Priority::Medium => stats.medium += 1,
                Priority::Low => stats.low += 1,
            }
        }
        stats
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub revenue: i64,
}

impl ServiceStats {
    pub fn of(services: &[Service]) -> Self {
        Self {
            total: services.len(),
            completed: services
                .iter()
                .filter(|s| s.status == ServiceStatus::Completed)
                .count(),
            in_progress: services
                .iter()
                .filter(|s| s.status == ServiceStatus::InProgress)
                .count(),
            revenue: services.iter().map(|s| s.price).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;

    #[test]
    fn customer_search_covers_name_id_and_phone() {
        let all = seed::customers();
        assert_eq!(filter_customers(all.clone(), Some("PRIYA")).len(), 1);
        assert_eq!(filter_customers(all.clone(), Some("cust003"))[0].name, "Amit Patel");
        assert_eq!(filter_customers(all.clone(), Some("3211"))[0].id, "CUST002");
        assert!(filter_customers(all.clone(), Some("rajesh.kumar@")).is_empty());
        assert_eq!(filter_customers(all, Some("   ")).len(), 3);
    }

    #[test]
    fn lead_search_covers_name_email_and_service() {
        let all = seed::leads();
        assert_eq!(filter_leads(all.clone(), Some("gst"))[0].id, "LEAD002");
        assert_eq!(filter_leads(all.clone(), Some("VIKRAM.SINGH@"))[0].id, "LEAD003");
        assert!(filter_leads(all, Some("9876543210")).is_empty());
    }

    #[test]
    fn stats_tally_seed_data() {
        let stats = PriorityStats::tally(seed::leads().iter().map(|l| l.priority));
        assert_eq!(stats, PriorityStats { high: 0, medium: 3, low: 1 });

        let services = ServiceStats::of(&seed::services());
        assert_eq!(services.completed, 3);
        assert_eq!(services.in_progress, 1);
        assert_eq!(services.revenue, 55_000);
    }
}
