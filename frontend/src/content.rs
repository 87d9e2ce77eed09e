//! Static talking points for each topic section of the meeting page.

use crate::navigation::Icon;

#[derive(Debug, PartialEq)]
pub struct Point {
    pub icon: Icon,
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, PartialEq)]
pub enum Highlight {
    Checklist { title: &'static str, items: &'static [&'static str] },
    Stats(&'static [Stat]),
}

#[derive(Debug, PartialEq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Plain,
    Gradient,
}

impl Backdrop {
    pub fn class(self) -> &'static str {
        match self {
            Backdrop::Plain => "backdrop-plain",
            Backdrop::Gradient => "backdrop-gradient",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Topic {
    pub section_id: &'static str,
    pub heading: &'static str,
    pub points: &'static [Point],
    pub highlight: Option<Highlight>,
    pub images: &'static [Image],
    pub backdrop: Backdrop,
}

pub static TOPICS: &[Topic] = &[
    Topic {
        section_id: "quality-food",
        heading: "Quality Food for Children",
        points: &[
            Point {
                icon: Icon::Apple,
                heading: "Junk Food Risks:",
                body: "High in sugar, unhealthy fats, and sodium while lacking essential nutrients. Examples include instant noodles (Maggie) and processed biscuits.",
            },
            Point {
                icon: Icon::CheckCircle,
                heading: "Health Impacts:",
                body: "Contributes to childhood obesity, type 2 diabetes, heart problems, and weakened immunity.",
            },
            Point {
                icon: Icon::CheckCircle,
                heading: "Cognitive Effects:",
                body: "Poor nutrition impairs brain development, concentration, and academic performance.",
            },
        ],
        highlight: None,
        images: &[
            Image { src: "/assets/healthy_vs_junk.webp", alt: "Healthy vs Junk Food Comparison" },
            Image { src: "/assets/food_comparison_chart.png", alt: "Nutritional Value Chart" },
        ],
        backdrop: Backdrop::Plain,
    },
    Topic {
        section_id: "neat-uniform",
        heading: "Neat and Clean Uniform",
        points: &[
            Point {
                icon: Icon::Shirt,
                heading: "Hygiene and Health:",
                body: "Clean uniforms prevent accumulation of dirt, sweat, and bacteria, reducing the risk of skin irritations and infections.",
            },
            Point {
                icon: Icon::Users,
                heading: "Equality and Unity:",
                body: "Well-maintained uniforms minimize socio-economic disparities and foster a sense of belonging and school pride.",
            },
        ],
        highlight: Some(Highlight::Checklist {
            title: "Psychological Benefits",
            items: &[
                "Improved self-esteem and confidence",
                "Reduced peer pressure related to clothing",
                "Enhanced sense of responsibility",
            ],
        }),
        images: &[Image { src: "/assets/neat_uniform.jpg", alt: "Students in neat uniforms" }],
        backdrop: Backdrop::Gradient,
    },
    Topic {
        section_id: "good-hygiene",
        heading: "Good Hygiene Practices",
        points: &[
            Point {
                icon: Icon::Scissors,
                heading: "Good Haircut & Well-Combed Hair:",
                body: "Prevents accumulation of dirt, oil, and parasites like lice. Reduces risk of scalp infections and skin irritations.",
            },
            Point {
                icon: Icon::CheckCircle,
                heading: "Trimmed Nails:",
                body: "Crucial for preventing the spread of germs and infections. Long, dirty nails can harbor bacteria, fungi, and parasitic eggs.",
            },
            Point {
                icon: Icon::CheckCircle,
                heading: "Self-Esteem & Confidence:",
                body: "Children who practice good personal grooming habits tend to have higher self-esteem and confidence.",
            },
        ],
        highlight: None,
        images: &[Image { src: "/assets/hygiene.png", alt: "Children's hygiene practices infographic" }],
        backdrop: Backdrop::Plain,
    },
    Topic {
        section_id: "proper-footwear",
        heading: "Appropriate Footwear",
        points: &[
            Point {
                icon: Icon::Footprints,
                heading: "Healthy Foot Development:",
                body: "Children's feet are still developing, and ill-fitting shoes can impede healthy bone and muscle growth.",
            },
            Point {
                icon: Icon::CheckCircle,
                heading: "Importance of Socks:",
                body: "Socks absorb moisture, reduce friction, prevent blisters, and help regulate foot temperature.",
            },
        ],
        highlight: Some(Highlight::Checklist {
            title: "Proper Footwear Checklist",
            items: &[
                "Correct size with room for growth",
                "Flexible, non-slip soles for stability",
                "Breathable materials to prevent moisture",
                "Clean, intact socks of appropriate size",
            ],
        }),
        images: &[Image { src: "/assets/footwear.jpg", alt: "Guide to proper children's footwear" }],
        backdrop: Backdrop::Gradient,
    },
    Topic {
        section_id: "parental-involvement",
        heading: "Parental Involvement in Education",
        points: &[
            Point {
                icon: Icon::Home,
                heading: "Academic Achievement:",
                body: "Studies consistently show a strong correlation between parental involvement and higher academic achievement.",
            },
            Point {
                icon: Icon::Users,
                heading: "Holistic Development:",
                body: "Children with involved parents demonstrate better social skills, enhanced self-esteem, and more positive attitudes towards learning.",
            },
        ],
        highlight: Some(Highlight::Stats(&[
            Stat { value: "81%", caption: "Higher likelihood of high school graduation" },
            Stat { value: "40%", caption: "Fewer behavioral problems" },
        ])),
        images: &[Image { src: "/assets/homework.jpg", alt: "Parents helping children with homework" }],
        backdrop: Backdrop::Plain,
    },
    Topic {
        section_id: "no-mobiles",
        heading: "No Mobile Phones for Children",
        points: &[
            Point {
                icon: Icon::Smartphone,
                heading: "Academic Performance:",
                body: "Mobile phones are a major source of distraction during study time, leading to reduced concentration and poorer academic outcomes.",
            },
            Point {
                icon: Icon::CheckCircle,
                heading: "Physical Health:",
                body: "Excessive screen time disrupts sleep patterns, causes eye strain, and promotes a sedentary lifestyle.",
            },
        ],
        highlight: Some(Highlight::Checklist {
            title: "Supervising Studies",
            items: &[
                "Create a distraction-free study environment",
                "Set clear rules for technology usage",
                "Actively engage in homework supervision",
            ],
        }),
        images: &[
            Image { src: "/assets/screen_time.jpg", alt: "Negative effects of screen time" },
            Image { src: "/assets/mobile_impact_chart.png", alt: "Impact of Excessive Mobile Use Chart" },
        ],
        backdrop: Backdrop::Gradient,
    },
];

pub struct Action {
    pub icon: Icon,
    pub text: &'static str,
}

pub const CONCLUSION_SUMMARY: &str = "Our children's well-being depends on a holistic approach that addresses nutrition, hygiene, appropriate attire, and balanced technology use.";

pub static RECOMMENDED_ACTIONS: &[Action] = &[
    Action {
        icon: Icon::Apple,
        text: "Establish a school nutrition policy and provide healthy meal guidelines",
    },
    Action {
        icon: Icon::CheckCircle,
        text: "Implement regular uniform and hygiene checks with positive reinforcement",
    },
    Action {
        icon: Icon::Smartphone,
        text: "Develop a school technology policy with clear guidelines",
    },
];

pub fn topic_for(section_id: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.section_id == section_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::sections::{agenda, SECTIONS};

    #[test]
    fn every_agenda_item_has_content() {
        for section in agenda(SECTIONS) {
            assert!(topic_for(section.id).is_some(), "no content for {}", section.id);
        }
    }

    #[test]
    fn topics_follow_navigation_order() {
        let topic_ids: Vec<_> = TOPICS.iter().map(|t| t.section_id).collect();
        let agenda_ids: Vec<_> = agenda(SECTIONS).iter().map(|s| s.id).collect();
        assert_eq!(topic_ids, agenda_ids);
    }

    #[test]
    fn backdrops_alternate() {
        for pair in TOPICS.windows(2) {
            assert_ne!(pair[0].backdrop, pair[1].backdrop);
        }
    }

    #[test]
    fn every_topic_has_points_and_an_image() {
        for topic in TOPICS {
            assert!(!topic.points.is_empty(), "{}", topic.section_id);
            assert!(!topic.images.is_empty(), "{}", topic.section_id);
            assert!(topic.images.iter().all(|image| !image.alt.is_empty()));
        }
    }
}
