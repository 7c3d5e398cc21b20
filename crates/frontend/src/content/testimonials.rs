pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Our onboarding used to take three people most of a day. It now runs on its own \
            and we only look at the exceptions.",
        author: "Maria Lopez",
        role: "Operations Lead",
        company: "Brightpath Logistics",
    },
    Testimonial {
        quote: "The assistant answers most of our support questions before a ticket is even \
            opened, and the hand-off to our team is seamless.",
        author: "James Carter",
        role: "Head of Support",
        company: "Nimbus Software",
    },
    Testimonial {
        quote: "For the first time sales and finance are looking at the same numbers. The CRM \
            sync paid for itself within a quarter.",
        author: "Priya Raman",
        role: "COO",
        company: "Greenleaf Health",
    },
];
