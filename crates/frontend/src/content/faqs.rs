pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: &[Faq] = &[
    Faq {
        question: "How long does a typical project take?",
        answer: "Most automation projects go live in two to six weeks. Consulting engagements \
            are fixed at two weeks.",
    },
    Faq {
        question: "Do we need to change the tools we already use?",
        answer: "Usually not. We build around your existing stack and only recommend a new tool \
            when it clearly pays off.",
    },
    Faq {
        question: "What happens if an automation breaks?",
        answer: "Every workflow we ship has alerting. Support plans cover fixes, and we document \
            everything so your team can step in.",
    },
    Faq {
        question: "Is our data safe?",
        answer: "We work with least-privilege credentials, keep data in your accounts wherever \
            possible and sign an NDA before discovery starts.",
    },
    Faq {
        question: "How is pricing structured?",
        answer: "Projects are quoted at a fixed price after a free discovery call. Ongoing \
            support is a flat monthly fee.",
    },
];
