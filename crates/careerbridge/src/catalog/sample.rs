use super::domain::{JobType, OpportunityId, OpportunityRecord};

/// The seeded seven-job catalog used by the demo CLI, the default API data
/// source, and the scenario tests. Ids 1-7, ordered most recent first.
pub fn sample_catalog() -> Vec<OpportunityRecord> {
    vec![
        record(
            1,
            "Frontend Developer",
            "TechCorp",
            "Remote",
            JobType::FullTime,
            "$80,000 - $110,000",
            "2-4 years",
            "2 days ago",
            "Exciting opportunity for a frontend developer with React experience to join our innovative team. You'll be working on cutting-edge web applications used by millions of users worldwide.",
            &[
                "Develop responsive web applications using React",
                "Collaborate with UX/UI designers to implement modern interfaces",
                "Optimize applications for maximum performance",
                "Write clean, maintainable code and perform code reviews",
            ],
            &[
                "2+ years of experience with React",
                "Strong knowledge of JavaScript, HTML5, and CSS3",
                "Experience with state management (Redux, Context API)",
                "Familiarity with modern build tools (Webpack, Vite)",
            ],
            &["React", "JavaScript", "Tailwind CSS", "Redux"],
        ),
        record(
            2,
            "Marketing Intern",
            "GrowthMedia",
            "New York, NY",
            JobType::Internship,
            "$20-25/hour",
            "Entry level",
            "1 week ago",
            "Learn digital marketing strategies while working with industry professionals. Great opportunity for marketing students looking to gain real-world experience.",
            &[
                "Assist in social media campaign planning and execution",
                "Create content for various marketing channels",
                "Help analyze marketing metrics and prepare reports",
                "Support the marketing team in day-to-day activities",
            ],
            &[
                "Currently pursuing a degree in Marketing or related field",
                "Strong written and verbal communication skills",
                "Basic knowledge of social media platforms",
                "Creativity and eagerness to learn",
            ],
            &["Marketing", "Social Media", "Content Creation", "Internship"],
        ),
        record(
            3,
            "Data Scientist",
            "AnalyticsAI",
            "Hybrid",
            JobType::FullTime,
            "$120,000 - $150,000",
            "3-5 years",
            "3 days ago",
            "Join our team to develop machine learning models for predictive analytics. You'll be working on fascinating problems in various domains including finance and healthcare.",
            &[
                "Develop and implement machine learning models",
                "Process and analyze large datasets",
                "Collaborate with engineers and product managers",
                "Present findings to stakeholders",
            ],
            &[
                "MS or PhD in Computer Science, Statistics, or related field",
                "3+ years of experience in data science",
                "Strong programming skills in Python",
                "Experience with ML frameworks (TensorFlow, PyTorch)",
            ],
            &["Python", "ML", "Data Analysis", "AI"],
        ),
        record(
            4,
            "Backend Developer",
            "ServerStack",
            "San Francisco, CA",
            JobType::FullTime,
            "$100,000 - $130,000",
            "3-6 years",
            "1 week ago",
            "We're looking for a backend developer to help build robust APIs and services. Join a fast-growing startup with a focus on developer tools.",
            &[
                "Design and develop scalable backend systems",
                "Build and maintain RESTful APIs",
                "Implement database schemas and optimize queries",
                "Work with DevOps to deploy and monitor services",
            ],
            &[
                "Experience with Node.js, Python, or Java",
                "Knowledge of database systems (SQL and NoSQL)",
                "Understanding of microservice architecture",
                "Experience with cloud platforms (AWS, GCP, Azure)",
            ],
            &["Node.js", "Python", "API", "Database"],
        ),
        record(
            5,
            "UX/UI Designer",
            "DesignMinds",
            "Remote",
            JobType::Contract,
            "$60-80/hour",
            "2-5 years",
            "5 days ago",
            "Contract opportunity for a talented UX/UI designer to help create intuitive and beautiful interfaces for our mobile and web applications.",
            &[
                "Create wireframes, prototypes, and mockups",
                "Conduct user research and usability testing",
                "Collaborate with developers to implement designs",
                "Maintain design systems and documentation",
            ],
            &[
                "Portfolio demonstrating UX/UI design skills",
                "Experience with Figma, Sketch, or Adobe XD",
                "Understanding of design principles and accessibility",
                "Ability to translate user needs into design solutions",
            ],
            &["UX", "UI", "Figma", "Design", "Contract"],
        ),
        record(
            6,
            "Product Management Intern",
            "ProductLabs",
            "Boston, MA",
            JobType::Internship,
            "$25-30/hour",
            "Student",
            "2 weeks ago",
            "Exciting internship opportunity for students interested in product management. Learn how products are developed from conception to launch.",
            &[
                "Assist in defining product requirements",
                "Conduct market research and competitor analysis",
                "Help prioritize features and create roadmaps",
                "Work with cross-functional teams",
            ],
            &[
                "Currently pursuing a degree in Business, Computer Science, or related field",
                "Strong analytical and problem-solving skills",
                "Excellent communication abilities",
                "Interest in technology and product development",
            ],
            &["Product Management", "Business", "Internship", "Strategy"],
        ),
        record(
            7,
            "DevOps Engineer",
            "CloudSystems",
            "Remote",
            JobType::FullTime,
            "$115,000 - $140,000",
            "4-7 years",
            "3 days ago",
            "Join our DevOps team to build and maintain cloud infrastructure. You'll help ensure our systems are scalable, secure, and highly available.",
            &[
                "Implement CI/CD pipelines",
                "Manage cloud infrastructure (AWS/GCP)",
                "Automate deployment and monitoring",
                "Collaborate with development teams on infrastructure needs",
            ],
            &[
                "Experience with cloud platforms (AWS, GCP, Azure)",
                "Knowledge of containerization (Docker, Kubernetes)",
                "Experience with infrastructure as code (Terraform, CloudFormation)",
                "Understanding of networking and security concepts",
            ],
            &["DevOps", "AWS", "CI/CD", "Kubernetes"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    title: &str,
    company: &str,
    location: &str,
    job_type: JobType,
    salary: &str,
    experience: &str,
    posted: &str,
    description: &str,
    responsibilities: &[&str],
    requirements: &[&str],
    tags: &[&str],
) -> OpportunityRecord {
    OpportunityRecord {
        id: OpportunityId(id),
        title: title.to_string(),
        company: company.to_string(),
        location: Some(location.to_string()),
        job_type: Some(job_type),
        experience: Some(experience.to_string()),
        salary: Some(salary.to_string()),
        posted: Some(posted.to_string()),
        description: description.to_string(),
        tags: strings(tags),
        responsibilities: Some(strings(responsibilities)),
        requirements: Some(strings(requirements)),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
