use crate::artifacts::category::Category;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const FILE_DATE_FORMAT: &str = "%Y%m%d";
pub const CONTENT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const MAX_BULLETS: usize = 5;

/// File and content template attached to a category.
///
/// The rendered path is `<prefix><YYYYMMDD>.<extension>` relative to the
/// working copy, so it only depends on the category and the calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: &'static str,
    extension: &'static str,
    title: &'static str,
    summary: &'static str,
    bullets: [&'static str; MAX_BULLETS],
}

impl Template {
    pub fn for_category(category: Category) -> &'static Template {
        match category {
            Category::UpdateDocumentation => &UPDATE_DOCUMENTATION,
            Category::FixMinorBug => &FIX_MINOR_BUG,
            Category::AddNewFeature => &ADD_NEW_FEATURE,
            Category::RefactorCode => &REFACTOR_CODE,
            Category::UpdateDependencies => &UPDATE_DEPENDENCIES,
            Category::ImprovePerformance => &IMPROVE_PERFORMANCE,
            Category::AddComments => &ADD_COMMENTS,
            Category::UpdateReadme => &UPDATE_README,
            Category::FixTypo => &FIX_TYPO,
            Category::OptimizeCode => &OPTIMIZE_CODE,
            Category::AddTests => &ADD_TESTS,
            Category::EnhanceUi => &ENHANCE_UI,
            Category::UpdateConfig => &UPDATE_CONFIG,
            Category::ImproveLogging => &IMPROVE_LOGGING,
            Category::AddValidation => &ADD_VALIDATION,
            Category::FixSecurityIssue => &FIX_SECURITY_ISSUE,
            Category::UpdateApi => &UPDATE_API,
            Category::ImproveErrorHandling => &IMPROVE_ERROR_HANDLING,
            Category::AddMonitoring => &ADD_MONITORING,
            Category::UpdateDatabaseSchema => &UPDATE_DATABASE_SCHEMA,
        }
    }

    pub fn file_path(&self, date: NaiveDate) -> PathBuf {
        PathBuf::from(format!(
            "{}{}.{}",
            self.prefix,
            date.format(FILE_DATE_FORMAT),
            self.extension
        ))
    }

    /// Render the markdown-ish body, keeping at most `bullet_count` bullets.
    pub fn render(&self, date: NaiveDate, bullet_count: usize) -> String {
        let bullets = self
            .bullets
            .iter()
            .take(bullet_count)
            .map(|bullet| format!("- {bullet}"))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "# {}\n\n{} on {}\n\n{}",
            self.title,
            self.summary,
            date.format(CONTENT_DATE_FORMAT),
            bullets
        )
    }
}

const UPDATE_DOCUMENTATION: Template = Template {
    prefix: "docs/update_",
    extension: "md",
    title: "Documentation Update",
    summary: "Updated",
    bullets: [
        "Added new section",
        "Fixed formatting",
        "Updated examples",
        "Improved clarity",
        "Enhanced readability",
    ],
};

const FIX_MINOR_BUG: Template = Template {
    prefix: "src/bugfix_",
    extension: "py",
    title: "Bug Fix",
    summary: "Fixed minor issue",
    bullets: [
        "Resolved edge case",
        "Added error handling",
        "Updated tests",
        "Improved stability",
        "Enhanced reliability",
    ],
};

const ADD_NEW_FEATURE: Template = Template {
    prefix: "src/feature_",
    extension: "py",
    title: "New Feature",
    summary: "Added new functionality",
    bullets: [
        "Implemented core logic",
        "Added configuration options",
        "Updated documentation",
        "Enhanced user experience",
        "Improved functionality",
    ],
};

const REFACTOR_CODE: Template = Template {
    prefix: "src/refactor_",
    extension: "py",
    title: "Code Refactoring",
    summary: "Improved code structure",
    bullets: [
        "Extracted common functions",
        "Improved readability",
        "Added type hints",
        "Enhanced maintainability",
        "Better organization",
    ],
};

const UPDATE_DEPENDENCIES: Template = Template {
    prefix: "requirements_",
    extension: "txt",
    title: "Updated Dependencies",
    summary: "Updated package versions",
    bullets: [
        "Updated security patches",
        "Improved compatibility",
        "Added new packages",
        "Enhanced performance",
        "Better stability",
    ],
};

const IMPROVE_PERFORMANCE: Template = Template {
    prefix: "src/performance_",
    extension: "py",
    title: "Performance Improvements",
    summary: "Optimized code execution",
    bullets: [
        "Reduced memory usage",
        "Improved algorithm efficiency",
        "Added caching",
        "Enhanced speed",
        "Better resource utilization",
    ],
};

const ADD_COMMENTS: Template = Template {
    prefix: "src/comments_",
    extension: "py",
    title: "Added Comments",
    summary: "Improved code documentation",
    bullets: [
        "Added inline comments",
        "Explained complex logic",
        "Updated docstrings",
        "Enhanced readability",
        "Better understanding",
    ],
};

const UPDATE_README: Template = Template {
    prefix: "README_",
    extension: "md",
    title: "README Update",
    summary: "Updated project documentation",
    bullets: [
        "Added new features section",
        "Updated installation instructions",
        "Fixed typos",
        "Improved examples",
        "Enhanced clarity",
    ],
};

const FIX_TYPO: Template = Template {
    prefix: "docs/typo_fix_",
    extension: "md",
    title: "Typo Fix",
    summary: "Fixed spelling errors",
    bullets: [
        "Corrected documentation",
        "Updated examples",
        "Improved clarity",
        "Enhanced accuracy",
        "Better readability",
    ],
};

const OPTIMIZE_CODE: Template = Template {
    prefix: "src/optimize_",
    extension: "py",
    title: "Code Optimization",
    summary: "Optimized code structure",
    bullets: [
        "Improved algorithm",
        "Reduced complexity",
        "Enhanced maintainability",
        "Better performance",
        "Cleaner code",
    ],
};

const ADD_TESTS: Template = Template {
    prefix: "tests/test_",
    extension: "py",
    title: "Test Coverage",
    summary: "Added comprehensive tests",
    bullets: [
        "Unit tests for new features",
        "Integration tests",
        "Performance benchmarks",
        "Edge case coverage",
        "Better reliability",
    ],
};

const ENHANCE_UI: Template = Template {
    prefix: "ui/enhancement_",
    extension: "py",
    title: "UI Enhancement",
    summary: "Improved user interface",
    bullets: [
        "Better user experience",
        "Responsive design",
        "Improved accessibility",
        "Enhanced visuals",
        "Modern interface",
    ],
};

const UPDATE_CONFIG: Template = Template {
    prefix: "config/update_",
    extension: "py",
    title: "Configuration Update",
    summary: "Updated configuration",
    bullets: [
        "New settings added",
        "Improved defaults",
        "Enhanced security",
        "Better performance",
        "Flexible options",
    ],
};

const IMPROVE_LOGGING: Template = Template {
    prefix: "src/logging_",
    extension: "py",
    title: "Logging Improvements",
    summary: "Enhanced logging system",
    bullets: [
        "Better error tracking",
        "Improved debugging",
        "Enhanced monitoring",
        "Detailed logs",
        "Better insights",
    ],
};

const ADD_VALIDATION: Template = Template {
    prefix: "src/validation_",
    extension: "py",
    title: "Input Validation",
    summary: "Added input validation",
    bullets: [
        "Data integrity checks",
        "Error prevention",
        "Enhanced security",
        "Better reliability",
        "Improved safety",
    ],
};

const FIX_SECURITY_ISSUE: Template = Template {
    prefix: "security/fix_",
    extension: "py",
    title: "Security Fix",
    summary: "Fixed security vulnerability",
    bullets: [
        "Patched security hole",
        "Enhanced protection",
        "Improved safety",
        "Better security",
        "Vulnerability resolved",
    ],
};

const UPDATE_API: Template = Template {
    prefix: "api/update_",
    extension: "py",
    title: "API Update",
    summary: "Updated API endpoints",
    bullets: [
        "New endpoints added",
        "Improved responses",
        "Better documentation",
        "Enhanced functionality",
        "Updated version",
    ],
};

const IMPROVE_ERROR_HANDLING: Template = Template {
    prefix: "src/error_handling_",
    extension: "py",
    title: "Error Handling",
    summary: "Enhanced error handling",
    bullets: [
        "Better error messages",
        "Improved recovery",
        "Enhanced debugging",
        "Better user experience",
        "Robust handling",
    ],
};

const ADD_MONITORING: Template = Template {
    prefix: "monitoring/metrics_",
    extension: "py",
    title: "Monitoring",
    summary: "Added monitoring capabilities",
    bullets: [
        "Performance metrics",
        "Health checks",
        "Alert system",
        "Better visibility",
        "Proactive monitoring",
    ],
};

const UPDATE_DATABASE_SCHEMA: Template = Template {
    prefix: "database/schema_",
    extension: "sql",
    title: "Database Schema",
    summary: "Updated database schema",
    bullets: [
        "New tables added",
        "Index optimization",
        "Data migration",
        "Better performance",
        "Enhanced structure",
    ],
};
