use super::types::{
    Accent, Certification, ContactCommand, ContactContent, Experience, HeroContent, Metric,
    PipelineContent, PipelineStage, Portfolio, Project, ProjectMetric, Service, SkillCategory,
    StageStatus,
};

fn metric(label: &str, value: f64, suffix: &str, accent: Accent) -> Metric {
    Metric {
        label: label.to_string(),
        value,
        suffix: suffix.to_string(),
        decimals: None,
        accent,
    }
}

fn services(entries: &[(&str, &str)]) -> Vec<Service> {
    entries
        .iter()
        .map(|(name, description)| Service {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn stage(id: &str, name: &str, status: StageStatus, description: &str) -> PipelineStage {
    PipelineStage {
        id: id.to_string(),
        name: name.to_string(),
        status,
        description: description.to_string(),
    }
}

fn project_metrics(entries: &[(&str, &str)]) -> Vec<ProjectMetric> {
    entries
        .iter()
        .map(|(value, label)| ProjectMetric {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

fn certification(name: &str, level: &str, provider: &str, year: &str, accent: Accent) -> Certification {
    Certification {
        name: name.to_string(),
        level: level.to_string(),
        provider: provider.to_string(),
        year: year.to_string(),
        accent,
    }
}

fn command(cmd: &str, label: &str, url: &str) -> ContactCommand {
    ContactCommand {
        cmd: cmd.to_string(),
        label: label.to_string(),
        url: url.to_string(),
    }
}

impl Portfolio {
    /// The portfolio shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            hero: HeroContent {
                system_name: "devops-portfolio.sys".into(),
                status_label: "ALL SYSTEMS OPERATIONAL".into(),
                availability: "Available for new opportunities".into(),
                title: "DevOps".into(),
                subtitle: "Engineer".into(),
                tagline: "Building reliable, scalable cloud infrastructure. Automating everything. \
                          Specializing in AWS & Azure ecosystems."
                    .into(),
                metrics: vec![
                    metric("Uptime", 99.9, "%", Accent::Success),
                    metric("Deployments Automated", 500.0, "+", Accent::Primary),
                    metric("Years Experience", 3.0, "+", Accent::Secondary),
                ],
                certified_on: "AWS & Azure".into(),
            },
            skills: vec![
                SkillCategory {
                    title: "AWS Services".into(),
                    accent: Accent::Primary,
                    services: services(&[
                        ("EC2", "Auto-scaling compute"),
                        ("VPC", "Network architecture"),
                        ("IAM", "Security & access"),
                        ("Lambda", "Serverless functions"),
                        ("CloudFormation", "IaC templates"),
                        ("Route 53", "DNS management"),
                    ]),
                },
                SkillCategory {
                    title: "Azure Services".into(),
                    accent: Accent::Secondary,
                    services: services(&[
                        ("DevOps", "CI/CD pipelines"),
                        ("ARM", "Resource manager"),
                        ("Monitor", "Observability"),
                        ("Functions", "Serverless compute"),
                        ("AAD", "Identity management"),
                        ("AKS", "Kubernetes service"),
                    ]),
                },
                SkillCategory {
                    title: "CI/CD & Tools".into(),
                    accent: Accent::Muted,
                    services: services(&[
                        ("Jenkins", "Build automation"),
                        ("GitHub Actions", "Workflow automation"),
                        ("Docker", "Containerization"),
                        ("Terraform", "Infrastructure as Code"),
                        ("Ansible", "Configuration mgmt"),
                        ("Kubernetes", "Container orchestration"),
                    ]),
                },
            ],
            pipeline: PipelineContent {
                stages: vec![
                    stage("code", "Code", StageStatus::Complete, "Git push triggers pipeline"),
                    stage("build", "Build", StageStatus::Complete, "Docker containerization"),
                    stage("test", "Test", StageStatus::Complete, "Automated test suites"),
                    stage("deploy", "Deploy", StageStatus::Active, "Blue-green deployment"),
                    stage("monitor", "Monitor", StageStatus::Pending, "Real-time observability"),
                ],
                metrics: vec![
                    metric("Build Time Reduced", 60.0, "%", Accent::Primary),
                    metric("Deployment Failures", 95.0, "% ↓", Accent::Success),
                    metric("Automation Coverage", 98.0, "%", Accent::Secondary),
                ],
            },
            projects: vec![
                Project {
                    title: "Multi-Region AWS Infrastructure".into(),
                    description: "High-availability cloud architecture with automatic failover"
                        .into(),
                    architecture: strings(&["Route 53", "EC2 Auto Scaling", "RDS Multi-AZ"]),
                    tech_stack: strings(&["AWS", "Terraform", "CloudFormation", "Python"]),
                    metrics: project_metrics(&[
                        ("50%", "Provisioning Time"),
                        ("99.99%", "Uptime Achieved"),
                    ]),
                    accent: Accent::Primary,
                },
                Project {
                    title: "Kubernetes Migration Project".into(),
                    description: "Containerized legacy applications for Azure Kubernetes Service"
                        .into(),
                    architecture: strings(&["Azure DevOps", "AKS Cluster", "Azure SQL"]),
                    tech_stack: strings(&["Azure", "Kubernetes", "Docker", "Helm"]),
                    metrics: project_metrics(&[
                        ("40%", "Infrastructure Cost"),
                        ("10x", "Deployment Speed"),
                    ]),
                    accent: Accent::Secondary,
                },
                Project {
                    title: "Observability Platform".into(),
                    description: "Centralized monitoring and alerting for microservices".into(),
                    architecture: strings(&["Prometheus", "Grafana Stack", "Alert Manager"]),
                    tech_stack: strings(&["Grafana", "Prometheus", "Loki", "Terraform"]),
                    metrics: project_metrics(&[("80%", "MTTR Reduction"), ("100%", "Visibility")]),
                    accent: Accent::Success,
                },
            ],
            certifications: vec![
                certification(
                    "AWS Solutions Architect",
                    "Associate",
                    "Amazon Web Services",
                    "2023",
                    Accent::Primary,
                ),
                certification(
                    "Azure Solutions Architect",
                    "Expert",
                    "Microsoft",
                    "2024",
                    Accent::Secondary,
                ),
                certification("Certified Kubernetes Admin", "CKA", "CNCF", "2023", Accent::Success),
                certification("HashiCorp Terraform", "Associate", "HashiCorp", "2024", Accent::Primary),
            ],
            experience: vec![
                Experience {
                    company: "TechCorp Global".into(),
                    role: "Senior DevOps Engineer".into(),
                    duration: "2023 - Present".into(),
                    platforms: strings(&["AWS", "Azure"]),
                    achievements: strings(&[
                        "Led migration of 50+ microservices to Kubernetes",
                        "Reduced deployment time by 70% with GitOps practices",
                        "Implemented zero-downtime deployment strategies",
                    ]),
                },
                Experience {
                    company: "CloudScale Solutions".into(),
                    role: "DevOps Engineer".into(),
                    duration: "2021 - 2023".into(),
                    platforms: strings(&["AWS"]),
                    achievements: strings(&[
                        "Automated infrastructure provisioning with Terraform",
                        "Built CI/CD pipelines serving 15 development teams",
                        "Achieved 99.9% uptime for production systems",
                    ]),
                },
                Experience {
                    company: "StartupX Inc".into(),
                    role: "Junior DevOps Engineer".into(),
                    duration: "2020 - 2021".into(),
                    platforms: strings(&["AWS"]),
                    achievements: strings(&[
                        "Containerized legacy applications using Docker",
                        "Set up monitoring and alerting with Prometheus",
                        "Reduced infrastructure costs by 30%",
                    ]),
                },
            ],
            contact: ContactContent {
                host: "devops@portfolio:~".into(),
                prompt: "$ run connect".into(),
                commands: vec![
                    command("ssh", "linkedin", "https://linkedin.com"),
                    command("curl", "email", "mailto:hello@devops.engineer"),
                    command("wget", "resume", "#"),
                    command("git clone", "github", "https://github.com"),
                ],
                status_line: "Ready to accept connections".into(),
                credit: "Built with Rust • Deployed on Cloud • Always Available".into(),
            },
        }
    }
}
