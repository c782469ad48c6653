use serde::{Deserialize, Serialize};

/// Area of the organisation a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqTopic {
    Grants,
    Internships,
    VentureSupport,
    General,
}

/// A curated question with its canonical answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub topic: FaqTopic,
    pub question: String,
    pub answer: String,
}

/// The published FAQ catalog.
pub fn default_catalog() -> Vec<FaqEntry> {
    CATALOG
        .iter()
        .map(|(topic, question, answer)| FaqEntry {
            topic: *topic,
            question: (*question).to_string(),
            answer: (*answer).to_string(),
        })
        .collect()
}

const CATALOG: &[(FaqTopic, &str, &str)] = &[
    (
        FaqTopic::Grants,
        "What is Alusive Africa's Tuition Grant Program?",
        "Alusive Africa's tuition grant program is our third of three pillars to support fee-paying students at The African Leadership University in need.",
    ),
    (
        FaqTopic::Grants,
        "When does the next application for Alusive Africa's grant open?",
        "While we aim to award grants at least twice every year, our applications open on the basis of fund availability.",
    ),
    (
        FaqTopic::Grants,
        "Who is eligible to apply for the grant?",
        "Any student at the African Leadership University in need of some financial support is welcome to apply for Alusive Africa's tuition grant.",
    ),
    (
        FaqTopic::Grants,
        "What does the grant cover?",
        "Alusive Africa tuition grant is only meant to go towards tuition support for students at the African Leadership University.",
    ),
    (
        FaqTopic::Grants,
        "What are the criteria for receiving a grant?",
        "Applicants of Alusive Africa tuition grant program are evaluated on the basis of need, academic performance and community contribution.",
    ),
    (
        FaqTopic::Grants,
        "How much can one receive for funding?",
        "Alusive Africa grant allocations is the result of a holistic evaluation on a case-by-case basis.",
    ),
    (
        FaqTopic::Grants,
        "How is the grant amount determined?",
        "Alusive Africa grant allocation is the result of a thorough holistic evaluation on a case-by-case basis.",
    ),
    (
        FaqTopic::Grants,
        "How does one apply for Alusive Africa's Tuition Grant?",
        "Alusive Africa tuition grant program opens for application whenever we publish, usually via student email.",
    ),
    (
        FaqTopic::Grants,
        "How long does the application process take?",
        "While an application for Alusive Africa's tuition grant program can be done in one sitting, the platform we use allows applicants to pause and resume wherever they left at their convenience.",
    ),
    (
        FaqTopic::Grants,
        "What documents do I need to submit with my application?",
        "Supporting documents for any applicant to demonstrate their financial need, academic performance, and community service vary on a case-by-case basis.",
    ),
    (
        FaqTopic::Grants,
        "When will I know the decision regarding my application?",
        "We endeavor to open applications for Alusive Africa's tuition grant program towards the end of one trimester and announce the decisions during the next trimester.",
    ),
    (
        FaqTopic::Grants,
        "Can I apply for the grant if I have received it before?",
        "Returning applicants are definitely welcome to reapply for Alusive Africa's tuition grant program, even though their priority levels are typically lower.",
    ),
    (
        FaqTopic::Grants,
        "What happens if I receive a partial grant and still need more financial support?",
        "While we would like to support Alusive Africa's grant recipients to the best of our ability, our grant might not entirely cover their tuition fee deficit and we encourage them to explore other avenues of funding.",
    ),
    (
        FaqTopic::Grants,
        "Are there any conditions attached to the grant?",
        "Yes. Any conditions attached to Alusive Africa's tuition grant program are outlined in the application form, and the grant agreement recipients sign in order to accept their offer.",
    ),
    (
        FaqTopic::Grants,
        "Can I apply for a grant if I already have other scholarships?",
        "Yes. Any student in need of financial support towards their tuition at the African Leadership University is welcome to apply for the Alusive Africa tuition grant program.",
    ),
    (
        FaqTopic::Grants,
        "What happens if I drop out or defer my studies after receiving a grant?",
        "Only enrolled students are eligible to apply for Alusive Africa's tuition grant program.",
    ),
    (
        FaqTopic::Grants,
        "What is the deadline for grant applications?",
        "Alusive Africa grant application deadlines are usually clearly communicated when it opens and is also outlined in the application.",
    ),
    (
        FaqTopic::Grants,
        "How do I increase my chances of getting a grant?",
        "Alusive Africa grant allocation is the result of a holistic evaluation on a case-by-case basis so accurate verifiable information to the best of your knowledge is a good place to start.",
    ),
    (
        FaqTopic::Grants,
        "Who can I contact if I have issues with my application?",
        "Feel free to contact Alusive Africa via our email at alusiveafrica.rwa@alustudent.com or phone number +250735545222 about any issues unanswered in our chat.",
    ),
    (
        FaqTopic::Internships,
        "What internship opportunities does Alusive Africa offer?",
        "Alusive Africa internships offer opportunities in Communication, Marketing and Tech.",
    ),
    (
        FaqTopic::Internships,
        "Who is eligible to apply for an internship?",
        "Any enrolled student at the African Leadership University is eligible to apply for Alusive Africa internship.",
    ),
    (
        FaqTopic::Internships,
        "How do I apply for an internship?",
        "Alusive Africa internship applications are usually formally announced via student email.",
    ),
    (
        FaqTopic::Internships,
        "Are Alusive Africa internships paid?",
        "Yes. All Alusive internships are compensated via Alusive credits.",
    ),
    (
        FaqTopic::Internships,
        "What are Alusive credits?",
        "Alusive credits are the payment mode for Alusive internships and are only redeemable toward tuition fees at the African Leadership University.",
    ),
    (
        FaqTopic::Internships,
        "What skills or experience do I need to apply?",
        "As an opportunity to start and grow your career, while Alusive Africa internships would benefit from previous expertise, we prioritize a burning desire to learn on the job.",
    ),
    (
        FaqTopic::Internships,
        "How long do internships last?",
        "Alusive Africa internships last a trimester.",
    ),
    (
        FaqTopic::Internships,
        "When do Alusive internships begin?",
        "Alusive internships usually start at the beginning of a new trimester just after the hiring process is concluded and an agreement accepted by the intern.",
    ),
    (
        FaqTopic::Internships,
        "Can interns work remotely?",
        "Yes. Depending on the role, Alusive internships can be virtual, hybrid or in-person.",
    ),
    (
        FaqTopic::Internships,
        "What are the responsibilities of an intern?",
        "Every role for every internship position at Alusive Africa has different responsibilities clearly outlined in the job description on the internship agreement form.",
    ),
    (
        FaqTopic::Internships,
        "Will I receive a certificate or recommendation letter after completing the internship?",
        "Yes. While Alusive Africa does not provide a certificate after completing the internship, we are more than happy to provide you with a letter of completion and a recommendation letter upon request otherwise a formal email is what we share at the beginning and end of each internship.",
    ),
    (
        FaqTopic::Internships,
        "Can an internship lead to a long-term role with Alusive Africa?",
        "Yes. Alusive Africa internship can definitely lead to a long-term role.",
    ),
    (
        FaqTopic::Internships,
        "How competitive is the internship application process?",
        "Alusive internships are very competitive, given the large pool of applicants.",
    ),
    (
        FaqTopic::Internships,
        "What support do interns receive during their internship?",
        "Alusive interns received robust professional support necessary for their growth during the full period of the internship.",
    ),
    (
        FaqTopic::Internships,
        "How many interns does Alusive Africa recruit each cycle?",
        "The number of interns recruited by Alusive Africa during any internship cycle depends on our need during that period.",
    ),
    (
        FaqTopic::Internships,
        "Can I apply if I am a first-year student?",
        "Yes. All eligible enrolled students are welcome to apply for the Alusive Africa internship irrespective of their year of study.",
    ),
    (
        FaqTopic::Internships,
        "What happens if I need to leave the internship early?",
        "Tendering a notice with your intent to leave should be done 2 weeks in advance for proper team adjustments.",
    ),
    (
        FaqTopic::Internships,
        "Do interns get to work on real projects?",
        "Yes. All Alusive Africa internship projects are real-world and consequential.",
    ),
    (
        FaqTopic::Internships,
        "Is there any mentorship provided during the internship?",
        "Yes. Career development through mentorship is a core part of the Alusive Africa internship.",
    ),
    (
        FaqTopic::Internships,
        "Can I apply for both an internship and a grant at the same time?",
        "Yes. Eligible candidates are welcome to apply for both the internship and grant at Alusive Africa.",
    ),
    (
        FaqTopic::Internships,
        "Do interns receive any training or onboarding?",
        "Yes. A comprehensive training and onboarding process is primary for every cycle of Alusive Africa internship.",
    ),
    (
        FaqTopic::VentureSupport,
        "What kind of support does Alusive Africa offer to student entrepreneurs?",
        "At this time, Alusive Africa offers support through meaningful partnerships with student ventures with whom we share goals.",
    ),
    (
        FaqTopic::VentureSupport,
        "Who is eligible for student venture support?",
        "All enrolled students interested in Alusive student venture support are welcome to apply by sending their proposal to Alusive Africa via email.",
    ),
    (
        FaqTopic::VentureSupport,
        "Does Alusive Africa provide funding for student startups?",
        "No. At this time, our funding model has yet to directly extend cash support to student startups.",
    ),
    (
        FaqTopic::VentureSupport,
        "How can I apply for venture support?",
        "Writing a proposal to us at Alusive Africa through our email address is how to apply for student venture support.",
    ),
    (
        FaqTopic::VentureSupport,
        "What types of businesses does Alusive Africa support?",
        "Alusive Africa supports all business ventures that pass our evaluation for meaningful partnership.",
    ),
    (
        FaqTopic::VentureSupport,
        "Do I need to be part of a team to receive support?",
        "No. You don't need to be part of a team to receive support.",
    ),
    (
        FaqTopic::VentureSupport,
        "Can I apply if my venture is still in the idea stage?",
        "Yes. Eligible students are welcome to apply no matter the stage they are in their business.",
    ),
    (
        FaqTopic::VentureSupport,
        "Are there networking opportunities for student founders?",
        "Yes. Plenty of networking opportunities exist for student founders who partner with Alusive Africa.",
    ),
    (
        FaqTopic::VentureSupport,
        "Does Alusive Africa take any equity in student startups?",
        "Not yet. Our partnership model is yet to explore taking a stake in terms of equity in student startups.",
    ),
    (
        FaqTopic::VentureSupport,
        "Can I apply for both a grant and venture support?",
        "Yes. Eligible applicants are more than welcome to apply for both Alusive grants and our student venture support.",
    ),
    (
        FaqTopic::General,
        "What is Alusive Africa?",
        "Alusive Africa is a student-led non-profit organization based at the African Leadership University on a mission to support fee-paying students with our grants, offer career development opportunities through our internships and invest in student-led ventures.",
    ),
    (
        FaqTopic::General,
        "What does Alusive Africa do?",
        "Alusive Africa facilitates grant-based tuition support, contributes towards student career development opportunities and collaborates with other student-led ventures to foster community development through initiatives like the Giveaway4Good.",
    ),
    (
        FaqTopic::General,
        "How does Alusive Africa raise funds for grants?",
        "Alusive Africa raises its funding through donations, partnerships, and fundraising initiatives. The organization is also working toward establishing 501(c)(3) status in the U.S. to expand its fundraising capabilities.",
    ),
    (
        FaqTopic::General,
        "What is the Giveaway4Good initiative?",
        "The Giveaway4Good is an initiative under Alusive Africa that partners with other student-led ventures to equip, enable and empower fellow students, emerging talents and aspiring founders.",
    ),
    (
        FaqTopic::General,
        "How can I support Alusive Africa?",
        "You can support Alusive Africa by Donating to the grant fund, Partnering with the organization, Volunteering or contributing skills, and Spreading awareness about its mission.",
    ),
    (
        FaqTopic::General,
        "Is Alusive Africa affiliated with African Leadership University (ALU)?",
        "Yes. While Alusive Africa currently operates within the African Leadership University and primarily supports its students, it is an independent initiative working toward becoming a legally registered non-profit entity while still investing in our relationship with the African Leadership University as a founding partner.",
    ),
    (
        FaqTopic::General,
        "What is the long-term vision of Alusive Africa?",
        "The long-term vision is to establish Alusive Africa as a fully independent legal entity, expand its impact beyond ALU, and create a sustainable, student-led structure that continues to provide financial support, career development opportunities and venture support to students across Africa.",
    ),
    (
        FaqTopic::General,
        "How can I contact Alusive Africa?",
        "Alusive Africa can be contacted via email at alusiveafrica.rwa@alustudent.com or phone number at +250735545222.",
    ),
];
