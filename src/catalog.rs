//! Marketing content for the public site: service landing pages and pricing tiers.

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct ServiceOffering {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    /// Starting price in whole rupees.
    pub starting_price: i64,
    pub benefits: &'static [&'static str],
    pub process: &'static [&'static str],
    pub documents: &'static [&'static str],
    pub faqs: &'static [Faq],
}

pub static SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        slug: "company-registration",
        title: "Company Registration",
        tagline: "Incorporate your Private Limited Company in 7-10 working days",
        description: "End-to-end incorporation with the Ministry of Corporate Affairs: name approval, \
                      DSC and DIN for directors, MOA/AOA drafting and PAN/TAN for the company.",
        starting_price: 15_000,
        benefits: &[
            "Separate legal entity with limited liability",
            "Easier access to funding and bank credit",
            "Higher credibility with customers and vendors",
            "Perpetual succession",
        ],
        process: &[
            "Share your documents and proposed names",
            "We obtain DSC and reserve the company name",
            "We file SPICe+ incorporation forms",
            "Receive your Certificate of Incorporation, PAN and TAN",
        ],
        documents: &[
            "PAN Card of Directors",
            "Aadhaar Card of Directors",
            "Address Proof",
            "Bank Statement",
            "Passport Size Photos",
        ],
        faqs: &[
            Faq {
                question: "How many directors do I need?",
                answer: "A Private Limited Company needs at least two directors, one of whom must be resident in India.",
            },
            Faq {
                question: "Is a physical office required?",
                answer: "A registered office address is required; a residential address with a utility bill and NOC is accepted.",
            },
        ],
    },
    ServiceOffering {
        slug: "gst-registration",
        title: "GST Registration",
        tagline: "Get your GSTIN and start invoicing compliantly",
        description: "Application, follow-up and activation of your GST registration, with a \
                      walkthrough of the GST portal and your first return calendar.",
        starting_price: 5_000,
        benefits: &[
            "Claim input tax credit on purchases",
            "Sell across state lines and on marketplaces",
            "Legally collect GST from customers",
        ],
        process: &[
            "Share business and signatory details",
            "We prepare and file the GST REG-01 application",
            "We respond to any clarification notices",
            "Receive your GST certificate and login credentials",
        ],
        documents: &[
            "Company Registration Certificate",
            "Bank Account Details",
            "Address Proof of Business",
            "Identity Proof of Authorized Signatory",
        ],
        faqs: &[Faq {
            question: "Who must register for GST?",
            answer: "Businesses above the turnover threshold, inter-state suppliers and e-commerce sellers must register.",
        }],
    },
    ServiceOffering {
        slug: "trademark-registration",
        title: "Trademark Registration",
        tagline: "Protect your brand name and logo",
        description: "Comprehensive trademark search, class selection, application filing and \
                      objection handling with the Trade Marks Registry.",
        starting_price: 25_000,
        benefits: &[
            "Exclusive rights to your brand",
            "Legal remedy against infringement",
            "Use of the ® symbol once registered",
        ],
        process: &[
            "Trademark availability search",
            "Class selection and application drafting",
            "Filing with the Trade Marks Registry",
            "Examination report and objection responses",
        ],
        documents: &["Brand Logo", "Identity Proof", "Usage Evidence"],
        faqs: &[Faq {
            question: "How long does registration take?",
            answer: "You can use the ™ symbol immediately after filing; registration typically completes in 12-18 months.",
        }],
    },
    ServiceOffering {
        slug: "legal-documentation",
        title: "Legal Documentation",
        tagline: "Agreements and deeds drafted by professionals",
        description: "Partnership deeds, founders' agreements, NDAs, board resolutions and \
                      other business documents drafted and reviewed for you.",
        starting_price: 10_000,
        benefits: &[
            "Clear terms that prevent disputes",
            "Drafted to current law",
            "Fast turnaround",
        ],
        process: &[
            "Tell us what the document must cover",
            "We send a first draft",
            "Two rounds of revisions",
            "Final document ready to sign",
        ],
        documents: &["Partner Details", "Draft Terms"],
        faqs: &[Faq {
            question: "Do you handle stamping and notarisation?",
            answer: "Yes, we coordinate e-stamping and notarisation where the document requires it.",
        }],
    },
];

pub fn find_service(slug: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|s| s.slug == slug)
}

pub const BASE_ORIGINAL_PRICE: i64 = 7_141;
pub const BASE_DISCOUNTED_PRICE: i64 = 4_999;
pub const DISCOUNT_PERCENT: u32 = 30;

pub struct PricingPlan {
    pub name: &'static str,
    pub original_price: i64,
    pub discounted_price: i64,
    pub duration: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub not_included: &'static [&'static str],
    pub popular: bool,
}

/// `amount * tenths / 10`, rounded half up to whole rupees.
fn scale(amount: i64, tenths: i64) -> i64 {
    (amount * tenths + 5) / 10
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    let tier = |tenths: i64| {
        (
            scale(BASE_ORIGINAL_PRICE, tenths),
            scale(BASE_DISCOUNTED_PRICE, tenths),
        )
    };
    let (basic_orig, basic_disc) = tier(10);
    let (std_orig, std_disc) = tier(15);
    let (prem_orig, prem_disc) = tier(25);

    vec![
        PricingPlan {
            name: "Basic",
            original_price: basic_orig,
            discounted_price: basic_disc,
            duration: "month",
            description: "Perfect for small businesses and startups",
            features: &[
                "Company Registration",
                "GST Registration",
                "Basic Compliance Setup",
                "Digital Signature Certificate",
                "Email Support",
            ],
            not_included: &[
                "Trademark Registration",
                "Legal Documentation",
                "Dedicated Account Manager",
                "Priority Support",
            ],
            popular: false,
        },
        PricingPlan {
            name: "Standard",
            original_price: std_orig,
            discounted_price: std_disc,
            duration: "month",
            description: "Ideal for growing businesses with moderate needs",
            features: &[
                "Everything in Basic",
                "Trademark Registration",
                "Legal Documentation",
                "Annual Compliance Management",
                "Phone & Email Support",
                "Dedicated Account Manager",
            ],
            not_included: &["International Trademark", "24/7 Priority Support"],
            popular: true,
        },
        PricingPlan {
            name: "Premium",
            original_price: prem_orig,
            discounted_price: prem_disc,
            duration: "month",
            description: "Comprehensive solution for established businesses",
            features: &[
                "Everything in Standard",
                "International Trademark",
                "Patent Filing Assistance",
                "Comprehensive Legal Support",
                "Tax Planning & Advisory",
                "24/7 Priority Support",
                "Quarterly Business Review",
            ],
            not_included: &[],
            popular: false,
        },
    ]
}

/// Format whole rupees with Indian digit grouping, e.g. `₹1,25,000`.
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            groups.push(right);
            rest = left;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{tail}", groups.join(","))
    };
    if amount < 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_uses_lakh_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(4_999), "₹4,999");
        assert_eq!(format_inr(25_000), "₹25,000");
        assert_eq!(format_inr(125_000), "₹1,25,000");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
        assert_eq!(format_inr(-5_000), "-₹5,000");
    }

    #[test]
    fn plans_scale_from_basic() {
        let plans = pricing_plans();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].discounted_price, 4_999);
        assert_eq!(plans[1].original_price, 10_712);
        assert_eq!(plans[1].discounted_price, 7_499);
        assert_eq!(plans[2].discounted_price, 12_498);
        assert_eq!(plans.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn services_resolve_by_slug() {
        assert_eq!(find_service("gst-registration").unwrap().title, "GST Registration");
        assert!(find_service("visa-services").is_none());
    }
}
