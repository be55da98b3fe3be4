//! Static portfolio content shown by the page sections.

pub const BRAND: &str = "DevPortfolio";
pub const OWNER_NAME: &str = "John Doe";
pub const AVAILABILITY_BADGE: &str = "Available for Work";
pub const GITHUB_PROFILE_URL: &str = "https://github.com";
pub const RESUME_URL: &str = "https://example.com/resume.pdf";

pub const ROLES: [&str; 4] = [
    "Software Developer",
    "Tools & Automation Specialist",
    "Frontend Engineer",
    "Problem Solver",
];

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Hello! I'm a passionate software developer specializing in creating tools and automations \
     that enhance developer productivity. With over 5 years of experience building software \
     across various domains, I focus on crafting elegant solutions that simplify complex problems.",
    "My journey in tech began with a fascination for how things work under the hood. This \
     curiosity led me to explore low-level systems programming, where I developed a strong \
     foundation in C++ and C#. Eventually, I discovered my true passion: creating tools that \
     make developers' lives easier and workflows more efficient.",
    "Today, I channel my expertise into building automation systems, developer utilities, and \
     workflow optimizations that save teams countless hours and enable them to focus on what \
     truly matters: building great products.",
];

pub const FOCUS_AREAS: [&str; 4] = [
    "Developer Tools",
    "Automation",
    "Frontend",
    "Systems Programming",
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub focus: &'static str,
}

pub const EDUCATION: [Education; 2] = [
    Education {
        degree: "MSc Computer Science",
        school: "Stanford University",
        focus: "Specialized in Software Engineering and Systems",
    },
    Education {
        degree: "BSc Computer Science",
        school: "MIT",
        focus: "Focus on Algorithm Design and Data Structures",
    },
];

pub const CERTIFICATIONS: [&str; 2] = [
    "Microsoft Certified: Azure Developer Associate",
    "AWS Certified DevOps Engineer",
];

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100
    pub level: u8,
}

impl Skill {
    /// Top-tier skills get the accent bar
    pub fn is_highlighted(&self) -> bool {
        self.level > 90
    }
}

pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        id: "languages",
        name: "Languages",
        skills: &[
            Skill { name: "C++", level: 95 },
            Skill { name: "C#", level: 90 },
            Skill { name: "Python", level: 85 },
            Skill { name: "TypeScript", level: 92 },
            Skill { name: "JavaScript", level: 95 },
        ],
    },
    SkillCategory {
        id: "frontend",
        name: "Frontend",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "CSS/SCSS", level: 85 },
            Skill { name: "Tailwind CSS", level: 95 },
            Skill { name: "Angular", level: 75 },
            Skill { name: "Next.js", level: 80 },
        ],
    },
    SkillCategory {
        id: "backend",
        name: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 85 },
            Skill { name: "ASP.NET Core", level: 90 },
            Skill { name: "Django", level: 70 },
            Skill { name: "GraphQL", level: 75 },
            Skill { name: "RESTful APIs", level: 95 },
        ],
    },
    SkillCategory {
        id: "automation",
        name: "Automation",
        skills: &[
            Skill { name: "PowerShell", level: 95 },
            Skill { name: "Bash/Shell", level: 90 },
            Skill { name: "CI/CD Pipelines", level: 85 },
            Skill { name: "GitHub Actions", level: 90 },
            Skill { name: "Docker", level: 80 },
        ],
    },
];

pub const ADDITIONAL_SKILLS: [&str; 12] = [
    "Git",
    "AWS",
    "Azure",
    "Kubernetes",
    "SOLID Principles",
    "Microservices",
    "Performance Optimization",
    "TDD",
    "UX/UI",
    "Data Structures",
    "Algorithms",
    "System Design",
];

pub fn skill_category(id: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Featured,
    Other,
}

impl ProjectKind {
    pub fn tab_id(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Other => "other",
        }
    }

    pub fn from_tab_id(id: &str) -> Option<Self> {
        match id {
            "featured" => Some(Self::Featured),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub demo_url: &'static str,
    pub repo_url: &'static str,
    pub metrics: Option<&'static str>,
    pub kind: ProjectKind,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: "developer-tools",
        title: "Developer Toolkit",
        description: "A comprehensive suite of developer tools that streamlines common tasks, \
                      automates repetitive processes, and improves overall workflow efficiency.",
        tech: &["TypeScript", "React", "Node.js", "Electron"],
        demo_url: "https://example.com/devtoolkit",
        repo_url: "https://github.com/example/dev-toolkit",
        metrics: Some(
            "Reduced build times by 40% and automated 75+ routine tasks for a team of 20+ developers",
        ),
        kind: ProjectKind::Featured,
    },
    Project {
        id: "code-analyzer",
        title: "Code Quality Analyzer",
        description: "An intelligent code analysis tool that identifies potential bugs, security \
                      vulnerabilities, and performance bottlenecks, helping teams maintain high \
                      code quality standards.",
        tech: &["Python", "Machine Learning", "AST Analysis"],
        demo_url: "https://example.com/analyzer",
        repo_url: "https://github.com/example/code-analyzer",
        metrics: Some(
            "Identified 200+ critical issues across 500K+ lines of code, improving overall code quality by 35%",
        ),
        kind: ProjectKind::Featured,
    },
    Project {
        id: "build-system",
        title: "Custom Build System",
        description: "A highly optimized build system for large-scale C++ projects that \
                      significantly reduces compilation times through intelligent caching and \
                      parallel processing.",
        tech: &["C++", "Python", "CMake", "CI/CD"],
        demo_url: "https://example.com/build-system",
        repo_url: "https://github.com/example/build-system",
        metrics: Some("Reduced build times from 45 minutes to under 5 minutes for a 2M+ line codebase"),
        kind: ProjectKind::Featured,
    },
    Project {
        id: "dev-dashboard",
        title: "Developer Analytics Dashboard",
        description: "Real-time analytics dashboard for monitoring developer productivity, build \
                      health, and project progress.",
        tech: &["React", "D3.js", "Node.js", "MongoDB"],
        demo_url: "https://example.com/dev-dashboard",
        repo_url: "https://github.com/example/dev-dashboard",
        metrics: None,
        kind: ProjectKind::Other,
    },
    Project {
        id: "auto-docs",
        title: "Automated Documentation Generator",
        description: "Tool that automatically generates technical documentation from code \
                      comments and structure analysis.",
        tech: &["Python", "NLP", "Markdown"],
        demo_url: "https://example.com/auto-docs",
        repo_url: "https://github.com/example/auto-docs",
        metrics: None,
        kind: ProjectKind::Other,
    },
    Project {
        id: "dependency-analyzer",
        title: "Dependency Vulnerability Scanner",
        description: "Scans project dependencies for security vulnerabilities and suggests safer \
                      alternatives.",
        tech: &["JavaScript", "Security APIs", "Node.js"],
        demo_url: "https://example.com/dependency-scanner",
        repo_url: "https://github.com/example/dependency-scanner",
        metrics: None,
        kind: ProjectKind::Other,
    },
];

pub fn projects_of(kind: ProjectKind) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| p.kind == kind)
}

pub struct ToolMetrics {
    pub improvement: &'static str,
    pub old_value: &'static str,
    pub new_value: &'static str,
}

pub struct DevTool {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub metrics: ToolMetrics,
    pub code_snippet: &'static str,
}

/// (tab id, tab label)
pub const TOOL_CATEGORIES: [(&str, &str); 3] = [
    ("automation", "Automation"),
    ("generator", "Generators"),
    ("analysis", "Analysis"),
];

pub const DEV_TOOLS: [DevTool; 4] = [
    DevTool {
        id: "build-optimizer",
        category: "automation",
        title: "Build Process Optimizer",
        description: "A custom build system that drastically reduces compilation time for large \
                      C++ projects through intelligent dependency management and parallel \
                      processing.",
        features: &[
            "Smart dependency detection",
            "Parallel compilation",
            "Incremental builds",
            "Cloud caching",
        ],
        metrics: ToolMetrics {
            improvement: "85%",
            old_value: "45 min",
            new_value: "6.5 min",
        },
        code_snippet: r#"// Example of the build configuration
const BuildConfig = {
  parallelJobs: 16,
  cacheEnabled: true,
  incrementalBuilds: true,
  smartDependencies: {
    scanMode: 'deep',
    cacheInvalidation: 'selective'
  }
};

// Initialize the build optimizer
const optimizer = new BuildOptimizer(BuildConfig);
optimizer.analyze('./src').then(result => {
  console.log(`Found ${result.modules} modules`);
  optimizer.startBuild();
});"#,
    },
    DevTool {
        id: "code-generator",
        category: "generator",
        title: "Boilerplate Code Generator",
        description: "A smart templating system that generates standardized boilerplate code for \
                      new components, services, and modules based on project-specific patterns \
                      and best practices.",
        features: &[
            "Custom templates",
            "Context-aware generation",
            "Style guide enforcement",
            "Post-generation validation",
        ],
        metrics: ToolMetrics {
            improvement: "95%",
            old_value: "2 hours",
            new_value: "5 min",
        },
        code_snippet: r#"// Generate the component files
const generateComponent = (name, directory) => {
  const componentDir = path.join(directory, name);
  fs.mkdirSync(componentDir, { recursive: true });

  fs.writeFileSync(
    path.join(componentDir, `${name}.tsx`),
    componentTemplate(name)
  );
  fs.writeFileSync(
    path.join(componentDir, `index.ts`),
    `export * from './${name}';`
  );
};"#,
    },
    DevTool {
        id: "analyzer",
        category: "analysis",
        title: "Code Quality Analyzer",
        description: "A static analysis tool that scans code for quality issues, potential bugs, \
                      and performance problems, providing actionable recommendations.",
        features: &[
            "Custom rule sets",
            "Automated fixes",
            "Integration with CI/CD",
            "Trend reporting",
        ],
        metrics: ToolMetrics {
            improvement: "40%",
            old_value: "250 issues",
            new_value: "150 issues",
        },
        code_snippet: r#"// Sample configuration for the analyzer
module.exports = {
  rules: {
    'no-unused-vars': 'error',
    'prefer-const': 'warn',
    'security/no-eval': 'error'
  },
  plugins: ['performance', 'security', 'custom'],
  ignorePatterns: ['dist/**', 'node_modules/**'],
  autofix: true,
  maxWarnings: 50
};"#,
    },
    DevTool {
        id: "scripts",
        category: "automation",
        title: "Workflow Automation Scripts",
        description: "A collection of PowerShell and Bash scripts that automate common development \
                      tasks, from environment setup to deployment processes.",
        features: &[
            "Environment setup",
            "Database initialization",
            "Log processing",
            "Deployment automation",
        ],
        metrics: ToolMetrics {
            improvement: "70%",
            old_value: "3.5 hours",
            new_value: "1 hour",
        },
        code_snippet: r#"# PowerShell example for automating environment setup
function Setup-DevEnvironment {
    param([string]$ProjectName, [string]$GitRepo)

    if (-not (Test-Path $ProjectName)) {
        git clone $GitRepo $ProjectName
        Set-Location $ProjectName
    }
    if (Test-Path "package.json") {
        npm install
    }
    Write-Host "Development environment setup complete!"
}"#,
    },
];

pub fn tools_in(category: &str) -> impl Iterator<Item = &'static DevTool> + '_ {
    DEV_TOOLS.iter().filter(move |t| t.category == category)
}

pub struct GithubRepo {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub stars: u32,
    pub forks: u32,
    pub language: &'static str,
}

pub struct ArtPiece {
    pub title: &'static str,
    pub likes: u32,
}

pub struct Video {
    pub title: &'static str,
    pub views: &'static str,
    pub published: &'static str,
}

pub struct RedditPost {
    pub title: &'static str,
    pub subreddit: &'static str,
    pub upvotes: u32,
    pub comments: u32,
}

/// (tab id, tab label, blurb)
pub const SOCIAL_TABS: [(&str, &str, &str); 4] = [
    (
        "github",
        "GitHub",
        "Check out my top repositories on GitHub where I share developer tools, automation scripts, and more.",
    ),
    ("deviantArt", "DeviantArt", "Creative work and UI design concepts on DeviantArt"),
    ("youtube", "YouTube", "Technical tutorials and coding live streams on YouTube"),
    ("reddit", "Reddit", "Discussions and contributions to tech communities on Reddit"),
];

pub const GITHUB_REPOS: [GithubRepo; 3] = [
    GithubRepo {
        title: "developer-toolkit",
        description: "A comprehensive suite of developer tools that streamlines common tasks",
        url: "https://github.com/example/developer-toolkit",
        stars: 235,
        forks: 45,
        language: "TypeScript",
    },
    GithubRepo {
        title: "build-optimizer",
        description: "An intelligent build system for C++ projects that reduces compilation time",
        url: "https://github.com/example/build-optimizer",
        stars: 187,
        forks: 32,
        language: "C++",
    },
    GithubRepo {
        title: "code-analyzer",
        description: "Static analysis tool that identifies code quality issues and security vulnerabilities",
        url: "https://github.com/example/code-analyzer",
        stars: 156,
        forks: 28,
        language: "Python",
    },
];

pub const ART_PIECES: [ArtPiece; 3] = [
    ArtPiece { title: "Neon Cyberpunk Interface", likes: 124 },
    ArtPiece { title: "Minimalist Development Setup", likes: 86 },
    ArtPiece { title: "Neural Network Visualization", likes: 152 },
];

pub const VIDEOS: [Video; 3] = [
    Video {
        title: "Building a Custom Developer Toolkit from Scratch",
        views: "24K",
        published: "3 weeks ago",
    },
    Video {
        title: "Advanced C++ Performance Optimization Techniques",
        views: "18K",
        published: "1 month ago",
    },
    Video {
        title: "Automating Your Development Workflow",
        views: "32K",
        published: "2 months ago",
    },
];

pub const REDDIT_POSTS: [RedditPost; 3] = [
    RedditPost {
        title: "Created a tool that automates repetitive development tasks",
        subreddit: "r/programming",
        upvotes: 542,
        comments: 87,
    },
    RedditPost {
        title: "What are your favorite VSCode extensions for C++ development?",
        subreddit: "r/cpp",
        upvotes: 324,
        comments: 156,
    },
    RedditPost {
        title: "I built a code quality tool that helped our team reduce bugs by 40%",
        subreddit: "r/webdev",
        upvotes: 456,
        comments: 92,
    },
];

pub const CONTACT_EMAIL: &str = "contact@example.com";
pub const CONTACT_LOCATION: &str = "San Francisco, California";
pub const CONTACT_RESPONSE_TIME: &str = "Usually within 24 hours";

/// (label, url)
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
];

/// Footer quick links, by section id
pub const QUICK_LINKS: [&str; 4] = ["home", "projects", "skills", "contact"];
