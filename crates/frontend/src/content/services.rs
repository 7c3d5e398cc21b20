#[derive(Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// One entry of the service catalog, keyed by `slug`.
#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub process: &'static [ProcessStep],
}

pub static CATALOG: &[Service] = &[
    Service {
        id: 1,
        slug: "workflow-automation",
        title: "Workflow Automation",
        short_description: "Replace repetitive manual work with reliable automated workflows.",
        description: "We map how work actually moves through your team, then automate the \
            hand-offs, approvals and data entry that slow it down. Every workflow ships with \
            monitoring and a clear owner, so nothing fails silently.",
        benefits: &[
            "Hours of manual work removed every week",
            "Fewer copy-paste errors between systems",
            "Clear audit trail for every automated step",
            "Processes that keep running when people are away",
        ],
        tools: &["n8n", "Zapier", "Make", "Airtable", "Google Workspace"],
        process: &[
            ProcessStep { title: "Discovery", description: "Interview the team and map the current process end to end." },
            ProcessStep { title: "Design", description: "Agree on triggers, rules and exception handling before building." },
            ProcessStep { title: "Build", description: "Implement the workflow with logging and alerts from day one." },
            ProcessStep { title: "Handover", description: "Document the flow and train the people who will own it." },
        ],
    },
    Service {
        id: 2,
        slug: "ai-chatbots",
        title: "AI Assistants & Chatbots",
        short_description: "Assistants that answer customers and staff from your own knowledge.",
        description: "We build assistants grounded in your documentation, tickets and product \
            data. They answer routine questions instantly and hand off to a person with full \
            context when they should not answer alone.",
        benefits: &[
            "Instant answers outside business hours",
            "Support load shifted away from repetitive questions",
            "Answers grounded in your own content",
            "Seamless escalation to your team",
        ],
        tools: &["OpenAI", "Anthropic", "LangChain", "Pinecone", "Intercom"],
        process: &[
            ProcessStep { title: "Audit", description: "Collect the questions people actually ask and the sources that answer them." },
            ProcessStep { title: "Prototype", description: "Stand up a grounded assistant and test it against real conversations." },
            ProcessStep { title: "Integrate", description: "Connect it to your website, helpdesk or internal chat." },
            ProcessStep { title: "Tune", description: "Review transcripts and improve coverage and tone." },
        ],
    },
    Service {
        id: 3,
        slug: "crm-integration",
        title: "CRM Integration",
        short_description: "One source of truth for leads, deals and customers.",
        description: "We connect your CRM to the forms, inboxes, billing and support tools around \
            it, so records stay current without anyone re-typing them and sales sees the whole \
            customer at a glance.",
        benefits: &[
            "Leads routed to the right person in seconds",
            "No duplicate or stale customer records",
            "Pipeline reports you can trust",
        ],
        tools: &["HubSpot", "Salesforce", "Pipedrive", "Stripe", "Zapier"],
        process: &[
            ProcessStep { title: "Data map", description: "Inventory every system that creates or changes customer data." },
            ProcessStep { title: "Sync rules", description: "Decide which system owns which field and how conflicts resolve." },
            ProcessStep { title: "Migration", description: "Clean and import existing records before switching syncs on." },
            ProcessStep { title: "Rollout", description: "Enable integrations in stages and verify each one." },
        ],
    },
    Service {
        id: 4,
        slug: "data-pipelines",
        title: "Data Pipelines & Reporting",
        short_description: "Automated reporting from data you already collect.",
        description: "We pull data out of the tools you run on, clean it on a schedule and deliver \
            dashboards and reports that update themselves, so decisions are made on today's \
            numbers rather than last month's spreadsheet.",
        benefits: &[
            "Reports that refresh without manual exports",
            "Consistent metric definitions across teams",
            "Alerts when numbers move unexpectedly",
        ],
        tools: &["PostgreSQL", "BigQuery", "dbt", "Metabase", "Looker Studio"],
        process: &[
            ProcessStep { title: "Metrics", description: "Agree on the questions the data must answer." },
            ProcessStep { title: "Pipelines", description: "Extract, clean and load data on a reliable schedule." },
            ProcessStep { title: "Dashboards", description: "Build views for each audience, from operators to leadership." },
        ],
    },
    Service {
        id: 5,
        slug: "web-development",
        title: "Web Development",
        short_description: "Fast, maintainable websites and internal tools.",
        description: "From marketing sites to internal dashboards, we build web applications that \
            load quickly, are easy to change and plug straight into your automations.",
        benefits: &[
            "Fast pages that rank and convert",
            "Internal tools shaped around your workflows",
            "Forms and events wired into your automations",
            "Code your team can maintain",
        ],
        tools: &["Rust", "TypeScript", "React", "Leptos", "PostgreSQL"],
        process: &[
            ProcessStep { title: "Scope", description: "Define pages, users and integrations up front." },
            ProcessStep { title: "Design", description: "Wireframes and visual design reviewed with your team." },
            ProcessStep { title: "Build", description: "Iterative delivery with a live preview throughout." },
            ProcessStep { title: "Launch", description: "Deploy, monitor and hand over documentation." },
        ],
    },
    Service {
        id: 6,
        slug: "process-consulting",
        title: "Automation Consulting",
        short_description: "Find out where automation pays off before you build anything.",
        description: "A short, fixed-price engagement that reviews your operations and produces a \
            prioritised automation roadmap with estimated savings for each item.",
        benefits: &[
            "Clear priorities ranked by return",
            "Realistic estimates before any commitment",
            "Vendor-neutral tool recommendations",
        ],
        tools: &["Miro", "Notion", "Loom"],
        process: &[
            ProcessStep { title: "Workshops", description: "Short sessions with each team to surface friction." },
            ProcessStep { title: "Analysis", description: "Estimate effort and savings for every candidate." },
            ProcessStep { title: "Roadmap", description: "Deliver a prioritised plan you can run with or without us." },
        ],
    },
];

/// Look up a service by slug. The comparison is exact (case-sensitive).
pub fn find_by_slug(slug: &str) -> Option<&'static Service> {
    CATALOG.iter().find(|service| service.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = CATALOG.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), CATALOG.len());
        let ids: HashSet<_> = CATALOG.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_slugs_are_url_safe() {
        for service in CATALOG {
            assert!(
                !service.slug.is_empty()
                    && service
                        .slug
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad slug {:?}",
                service.slug
            );
        }
    }

    #[test]
    fn test_find_by_slug_is_case_sensitive() {
        assert_eq!(
            find_by_slug("web-development").map(|s| s.title),
            Some("Web Development")
        );
        assert!(find_by_slug("Web-Development").is_none());
        assert!(find_by_slug("unknown").is_none());
    }

    #[test]
    fn test_every_service_has_content() {
        for service in CATALOG {
            assert!(!service.benefits.is_empty(), "{}", service.slug);
            assert!(!service.tools.is_empty(), "{}", service.slug);
            assert!(!service.process.is_empty(), "{}", service.slug);
        }
    }
}
