pub struct CaseStudy {
    pub client: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    /// Slug of the service the engagement was built on.
    pub service: &'static str,
}

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        client: "Brightpath Logistics",
        industry: "Logistics",
        challenge: "Driver onboarding involved five systems and dozens of manual steps per hire.",
        solution: "A single intake form now triggers account creation, document checks and \
            scheduling across every system.",
        results: &["Onboarding time cut from 6 hours to 40 minutes", "Zero missed compliance documents in 12 months"],
        service: "workflow-automation",
    },
    CaseStudy {
        client: "Nimbus Software",
        industry: "SaaS",
        challenge: "Support volume grew faster than the team, with most tickets asking the same questions.",
        solution: "An assistant grounded in the docs and ticket history answers first-line \
            questions in the product and in the helpdesk.",
        results: &["58% of conversations resolved without a ticket", "First response time under 10 seconds"],
        service: "ai-chatbots",
    },
    CaseStudy {
        client: "Greenleaf Health",
        industry: "Healthcare",
        challenge: "Leads, invoices and patient enquiries lived in separate tools with no shared view.",
        solution: "Two-way sync between the CRM, billing and web forms with clear field ownership.",
        results: &["Duplicate records down 92%", "Monthly reporting prepared automatically"],
        service: "crm-integration",
    },
];
