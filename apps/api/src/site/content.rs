//! Static CV records rendered by the page, and the knowledge text the chat
//! widget sends with every question.

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub picture: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
    pub employer_url: &'static str,
    pub summary: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub abbr: &'static str,
    pub file: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub employer: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct CvDownload {
    pub file: &'static str,
    pub save_as: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Panagiotis Gkantzos",
    headline: "ServiceNow Technical Consultant & Developer",
    picture: "/profile.jpg",
    linkedin: "https://www.linkedin.com/in/panagiotis-gkantzos-341909b5",
    email: "panosgaz3@gmail.com",
    employer_url: "https://www.performance.gr/",
    summary: &[
        "I am a highly motivated and results-driven Computer Engineer with a Master's degree, \
         specializing in cutting-edge technology and software development. Currently, I am proud \
         to be part of the consulting team at Performance Technologies S.A., where I excel as a \
         skilled ServiceNow Developer.",
        "My passion for technology and innovation has driven my academic and professional journey. \
         My educational background in Computer Engineering has equipped me with a comprehensive \
         understanding of software design, system architecture, and programming languages.",
        "As a ServiceNow Developer, I thrive in crafting robust solutions that streamline business \
         processes and enhance overall efficiency. My expertise allows me to leverage the full \
         potential of the ServiceNow platform.",
    ],
};

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "System Administrator",
        abbr: "CSA",
        file: "/ServiceNow-CSA.pdf",
    },
    Certification {
        name: "Implementation Specialist – IT Service Management",
        abbr: "ITSM",
        file: "/ServiceNow-ITSM.pdf",
    },
    Certification {
        name: "Application Developer",
        abbr: "CAD",
        file: "/ServiceNow-CAD.pdf",
    },
    Certification {
        name: "Implementation Specialist – Customer Service Management",
        abbr: "CSM",
        file: "/ServiceNow-CSM.pdf",
    },
    Certification {
        name: "Implementation Specialist – Strategic Portfolio Management",
        abbr: "SPM",
        file: "/ServiceNow-SPM.pdf",
    },
];

pub const EDUCATION: &[Education] = &[Education {
    degree: "MSc in Computer Engineering & Informatics",
    institution: "University of Patras",
    period: "2015 – 2021",
    grade: "GPA: 6.62",
}];

pub const EXPERIENCE: &[Experience] = &[Experience {
    employer: "Performance Technologies S.A.",
    location: "Athens, Greece (Remote)",
    role: "ServiceNow Consultant & Developer",
    period: "Jul 2024 – Present",
}];

pub const SKILLS: &[SkillGroup] = &[SkillGroup {
    label: "ServiceNow",
    items: &[
        "ITSM",
        "CSM",
        "SPM",
        "Application Development",
        "UI/UX Customization",
    ],
}];

pub const CV_DOWNLOAD: CvDownload = CvDownload {
    file: "/cv.pdf",
    save_as: "Panagiotis-Gkantzos-CV.pdf",
};

impl Certification {
    /// Name offered to the browser for the download: the file path minus its leading slash.
    pub fn download_name(&self) -> &'static str {
        download_name(self.file)
    }
}

pub fn download_name(file: &str) -> &str {
    file.trim_start_matches('/')
}

/// Background facts sent along with every chat question.
///
/// Wider than the page: it also names the earlier employer and the general
/// programming skills, which the page itself does not list.
pub const KNOWLEDGE_TEXT: &str = "\
Name: Panagiotis Gkantzos
Role: ServiceNow Technical Consultant & Developer
Education: Integrated MSc in Computer Engineering & Informatics, University of Patras
Skills: ServiceNow ITSM, CSM, SPM, Application Development, UI/UX Customization, JavaScript, Python, HTML, CSS, Git, Agile
Experience: Performance Technologies S.A. | Deloitte (DACC)
Certifications: ServiceNow CSA, CAD, ITSM, CSM, SPM
";
