//! Built-in default document. Used on first run, when the stored
//! document fails to parse, and after a factory reset.

use crate::models::portfolio::{CareerContext, Experience, Project, Skill, SocialLinks};

const DETAILED_RESUME_CONTEXT: &str = "\
PROFESSIONAL DEVELOPMENT & COMPETENCY REPORT - LIAM CARTER
Focus: AI Engineering, Data Science, and Full-Stack Python Development

1. EXECUTIVE SUMMARY
This report outlines the technical competencies and certifications acquired through an intensive, multi-disciplinary curriculum focused on Artificial Intelligence, Software Engineering, and Data Science. The combined coursework represents over 200+ hours of hands-on training, transitioning from advanced Python programming to the deployment of autonomous AI Agents, Large Language Models (LLMs), and interactive web applications.

2. TECHNICAL SKILLS MATRIX
- Languages: Python (Advanced), SQL, HTML5, CSS3, JavaScript (Basic)
- AI & LLMs: OpenAI API, LangChain, Hugging Face, RAG, QLoRA, Fine-Tuning, Vector Databases (Pinecone/Chroma)
- Data Science: Pandas, NumPy, Scikit-Learn, Matplotlib, Seaborn, Plotly, Dash
- Machine Learning: Regression, Classification, Clustering, Neural Networks, Predictive Analytics
- Web & Automation: Flask, Django, Bootstrap 5, WordPress, Elementor, n8n (Workflow Automation), REST APIs
- Tools: Git/GitHub, Jupyter Notebooks, VS Code, Postman, Google Colab

3. DETAILED COMPETENCY BREAKDOWN
DOMAIN A: AI ENGINEERING & GENERATIVE AI
- RAG: Building systems that connect LLMs to private data sources to reduce hallucinations.
- Fine-Tuning: Using QLoRA to fine-tune open-source models (Llama 3, Mistral).
- Agent Orchestration: Designing autonomous AI agents capable of planning and multi-step reasoning.
- Vector Databases: Implementing vector storage for semantic search.

DOMAIN B: DATA SCIENCE & MACHINE LEARNING
- Statistical Foundations: Probability, distributions, A/B Testing.
- Supervised Learning: Linear/Polynomial Regression, Decision Trees, Random Forests, SVM.
- Unsupervised Learning: K-Means Clustering, PCA.
- Deep Learning: Neural Networks and scaling ML models.
- Data Visualization: Interactive charts (Plotly) and Dashboard Engineering (Dash).

DOMAIN C: CORE PROGRAMMING & SOFTWARE ARCHITECTURE
- Advanced Python: Decorators, Generators, Error Handling.
- OOP: Class inheritance, polymorphism, encapsulation.
- Web Development: Server-side applications using Flask and Django.
- Automation: Selenium/BeautifulSoup for web scraping and API consumption.

DOMAIN D: FRONTEND DESIGN & UI/UX
- Responsive Design: Bootstrap Grid system for Mobile/Desktop.
- Component Library: Modals, Navbars, Cards for rapid development.
- Rapid Prototyping: Landing pages via WordPress & Elementor.

4. PROJECT CAPABILITIES
- Custom Knowledge Chatbot (RAG/Python)
- Automated Lead Qualifier (n8n/LLM)
- Financial Analytics Dashboard (Plotly/Dash)
- Predictive Sales Model (Scikit-learn/NumPy)
- Responsive AI Web App (Flask/Bootstrap 5)";

const PROJECT_DEEP_DIVE_CONTEXT: &str = "\
PROJECT CAPABILITIES:
1. AI-Powered PFMEA Generator: Generates Process Failure Mode Effects and Analysis documents from vision maps.
2. AI Root Cause Analysis Application: Streamlines RCA for manufacturing issues.
3. n8n Agent with RAG Chatbot: Answers detailed questions from a knowledge base using Retrieval-Augmented Generation.
4. Website Chatbot with RAG: Context-aware responses for site visitors with lead storage.
5. AI Voice Agent: Uses GPT-4o for emails and communication summaries.
6. Web Scraping Application: Curates tech news for trend analysis.";

pub fn default_career_context() -> CareerContext {
    CareerContext {
        name: "Liam Carter".to_string(),
        title: "AI Engineer & Quality Manager".to_string(),
        bio: "Quality Manager and AI Champion at Danfoss Power Solutions. I bridge the gap \
              between industrial excellence and Generative AI. Beyond engineering, I'm an \
              electronic music producer, DJ, and a connoisseur of Italian and Chinese cuisine."
            .to_string(),
        profile_image_url: None,
        admin_password: Some("liam2025".to_string()),
        detailed_resume_context: DETAILED_RESUME_CONTEXT.to_string(),
        project_deep_dive_context: PROJECT_DEEP_DIVE_CONTEXT.to_string(),
        socials: SocialLinks {
            linked_in: "https://www.linkedin.com/in/liam-carter-82391325".to_string(),
            github: "https://github.com/liamcarter".to_string(),
        },
        core_competencies: vec![
            "LLM Engineering".to_string(),
            "RAG Systems".to_string(),
            "Process Automation".to_string(),
            "Six Sigma Quality".to_string(),
            "Python Dashboards".to_string(),
            "Electronic Music Production".to_string(),
        ],
        skills: vec![
            skill("s1", "Python (Advanced)", 95, "backend"),
            skill("s2", "AI & LLM (RAG)", 92, "ai"),
            skill("s3", "ML / Data Science", 88, "ai"),
            skill("s4", "n8n Automation", 90, "devops"),
            skill("s5", "Music Tech / DSP", 82, "creative"),
            skill("s6", "SQL / Databases", 85, "backend"),
        ],
        experience: vec![
            Experience {
                id: "exp1".to_string(),
                company: "Danfoss Power Solutions".to_string(),
                role: "Quality Manager & AI Lead".to_string(),
                period: "2021 - Present".to_string(),
                description: vec![
                    "Built Sales Feasibility Assistant checking SAP data via Teams chat."
                        .to_string(),
                    "Developed business-wide training courses for Generative AI adoption."
                        .to_string(),
                    "Integrating AI-powered tools to enhance quality management systems."
                        .to_string(),
                ],
                technologies: vec![
                    "Python".to_string(),
                    "SAP".to_string(),
                    "n8n".to_string(),
                    "LLMs".to_string(),
                ],
            },
            Experience {
                id: "exp2".to_string(),
                company: "Eaton Corporation".to_string(),
                role: "Quality Manager ACQI SSGB".to_string(),
                period: "2011 - 2021".to_string(),
                description: vec![
                    "Executed multiple Six Sigma projects significantly reducing variation."
                        .to_string(),
                    "Achieved 50% improvement in Customer DPPM within two quarters.".to_string(),
                    "Lead Assessor for Operations Assessments across multiple business units."
                        .to_string(),
                ],
                technologies: vec![
                    "Six Sigma".to_string(),
                    "8D".to_string(),
                    "PFMEA".to_string(),
                    "ISO9001".to_string(),
                ],
            },
        ],
        projects: vec![
            Project {
                id: "p1".to_string(),
                title: "AI PFMEA Generator".to_string(),
                description: "Generates complex Failure Mode documents from process maps using \
                              Computer Vision and LLMs."
                    .to_string(),
                image_url:
                    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=800"
                        .to_string(),
                tags: vec!["Vision".to_string(), "Python".to_string(), "Quality".to_string()],
                link: None,
            },
            Project {
                id: "p2".to_string(),
                title: "n8n RAG Chatbot".to_string(),
                description: "Enterprise-grade RAG implementation using n8n workflows for deep \
                              knowledge base retrieval."
                    .to_string(),
                image_url:
                    "https://images.unsplash.com/photo-1531746790731-6c087fecd05a?auto=format&fit=crop&q=80&w=800"
                        .to_string(),
                tags: vec!["n8n".to_string(), "RAG".to_string(), "No-Code".to_string()],
                link: None,
            },
            Project {
                id: "p3".to_string(),
                title: "AI Root Cause Analysis".to_string(),
                description: "Application streamlining RCA for manufacturing issues, integrating \
                              direct feedback loops."
                    .to_string(),
                image_url:
                    "https://images.unsplash.com/photo-1551288049-bbbda536339a?auto=format&fit=crop&q=80&w=800"
                        .to_string(),
                tags: vec!["LLMs".to_string(), "Manufacturing".to_string(), "Python".to_string()],
                link: None,
            },
        ],
    }
}

fn skill(id: &str, name: &str, level: u8, category: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}
