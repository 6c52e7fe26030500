use crate::gallery::{Category, Project};
use crate::icon::Icon;

pub struct Skill {
    pub label: &'static str,
    pub icon: Icon,
}

pub struct Certification {
    pub title: &'static str,
    pub provider: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub const HEADLINE: &str = "Full Stack Developer | Data Analyst | ML Enthusiast";

pub const HERO_INTRO: &str = "I specialize in building responsive web applications using MERN stack, \
and exploring the intersection of AI and user experience. Proficient in C++, Python, JavaScript, \
React, Node.js, SQL & data analysis.";

pub const ABOUT: &[&str] = &[
    "I'm a passionate Full Stack Developer based in Islamabad, with a strong foundation in \
Artificial Intelligence, currently pursuing my degree.",
    "I enjoy building responsive, user-friendly websites and solving real-world problems in the \
most efficient and scalable way possible. From frontend interfaces to backend logic, I love \
working across the full stack to bring ideas to life.",
    "I'm always looking for new opportunities where I can contribute, grow, and keep learning.",
];

pub const SKILLS: &[Skill] = &[
    Skill { label: "Python", icon: Icon::Python },
    Skill { label: "JS", icon: Icon::Javascript },
    Skill { label: "Express", icon: Icon::Express },
    Skill { label: "React", icon: Icon::React },
    Skill { label: "SQL", icon: Icon::Sqlite },
    Skill { label: "GitHub", icon: Icon::Git },
    Skill { label: "Tailwind", icon: Icon::Tailwind },
    Skill { label: "HTML", icon: Icon::Html },
    Skill { label: "CSS", icon: Icon::Css },
    Skill { label: "C++", icon: Icon::Cplusplus },
    Skill { label: "NoSQL", icon: Icon::Mongodb },
    Skill { label: "Pandas", icon: Icon::Pandas },
    Skill { label: "NumPy", icon: Icon::Numpy },
    Skill { label: "BeautifulSoup", icon: Icon::Python },
    Skill { label: "Selenium", icon: Icon::Selenium },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Full Stack Development",
        provider: "Meta on Coursera",
        image: "/static/certs/fullstack-meta.jpg",
        link: "#",
    },
    Certification {
        title: "Python for Data Science",
        provider: "IBM",
        image: "/static/certs/python-ibm.jpg",
        link: "#",
    },
    Certification {
        title: "JavaScript (Intermediate)",
        provider: "HackerRank",
        image: "/static/certs/js-hackerrank.jpg",
        link: "#",
    },
    Certification {
        title: "Machine Learning Basics",
        provider: "Google AI",
        image: "/static/certs/ml-google.jpg",
        link: "#",
    },
    Certification {
        title: "React Masterclass",
        provider: "Udemy",
        image: "/static/certs/react-udemy.jpg",
        link: "#",
    },
];

const DEMO_VIDEO: &str = "/static/videos/demo.mp4";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Task Manager",
        description: "A full-stack web application for team collaboration, allowing users to \
register/login securely, create and manage teams, add members, and assign tasks. Features a \
responsive dashboard with task filtering by team or assignee, built with a RESTful API and secure \
authentication.",
        tech: &["React", "Tailwind CSS", "Node.js", "Express", "PostgreSQL", "JWT", "SupaBase"],
        image: "/static/projects/task-manager.jpg",
        source: "https://github.com/i23-2082/task-manager",
        demo: DEMO_VIDEO,
        deployed_url: "https://task-frontend-gf8v.vercel.app/",
        featured: true,
        category: Category::Web,
    },
    Project {
        title: "Resume Tailor AI",
        description: "A full-stack web application that helps job seekers tailor their resumes to \
job descriptions in seconds. Features include resume/JD upload, LLM-powered skill comparison, \
tailored bullet point suggestions, match scoring, and auto-generated cover letters.",
        tech: &["React", "Tailwind CSS", "FastAPI", "LLAMA", "SupaBase"],
        image: "/static/projects/resume-tailor-ai.jpg",
        source: "https://github.com/i23-2082/resume-tailor-ai",
        demo: DEMO_VIDEO,
        deployed_url: "https://resume-analyzer-frontend-ten.vercel.app/",
        featured: true,
        category: Category::Web,
    },
    Project {
        title: "Genre Predictor & Translator",
        description: "A full-stack web application that predicts genres from text input, \
translates text into over 50 languages, and generates audio output using text-to-speech. Features \
a responsive UI, machine learning for genre classification, and integration with Google Translate \
and gTTS APIs.",
        tech: &["React", "Flask", "scikit-learn", "Google Translate", "gTTS"],
        image: "/static/projects/genre-predictor.jpg",
        source: "https://github.com/i23-2082/genre-predictor-translator",
        demo: DEMO_VIDEO,
        deployed_url: "#",
        featured: true,
        category: Category::Web,
    },
    Project {
        title: "NASCON",
        description: "A full-stack Database Management System for the NASCON event, automating \
user management, event and venue scheduling, sponsorships, accommodations, payments, and judging. \
Features role-based access with DCL, advanced SQL queries, and a responsive UI for seamless event \
management.",
        tech: &["React", "Node.js", "Express", "MySQL"],
        image: "/static/projects/nascon.jpg",
        source: "https://github.com/i23-2082/nascon",
        demo: DEMO_VIDEO,
        deployed_url: "#",
        featured: true,
        category: Category::Web,
    },
    Project {
        title: "Playfinity",
        description: "A game purchase website for gaming enthusiasts, offering a sleek, \
user-friendly interface to explore trending games like Call of Duty: Modern Warfare 2, Minecraft, \
and Elden Ring, alongside game descriptions.",
        tech: &["HTML", "CSS", "JavaScript"],
        image: "/static/projects/playfinity.jpg",
        source: "https://github.com/i23-2082/playfinity",
        demo: DEMO_VIDEO,
        deployed_url: "#",
        featured: true,
        category: Category::Web,
    },
];
