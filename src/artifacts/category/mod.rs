//! Commit categories
//!
//! A category is the label that drives which file and content template a
//! synthetic change uses. The first fifteen categories form the core set used
//! by the bounded backfill; the extended set adds five more for the year
//! backfill.

pub mod template;

use template::Template;

pub const CORE_CATEGORY_COUNT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    UpdateDocumentation,
    FixMinorBug,
    AddNewFeature,
    RefactorCode,
    UpdateDependencies,
    ImprovePerformance,
    AddComments,
    UpdateReadme,
    FixTypo,
    OptimizeCode,
    AddTests,
    EnhanceUi,
    UpdateConfig,
    ImproveLogging,
    AddValidation,
    FixSecurityIssue,
    UpdateApi,
    ImproveErrorHandling,
    AddMonitoring,
    UpdateDatabaseSchema,
}

impl Category {
    /// Every category, core set first.
    pub const ALL: [Category; 20] = [
        Category::UpdateDocumentation,
        Category::FixMinorBug,
        Category::AddNewFeature,
        Category::RefactorCode,
        Category::UpdateDependencies,
        Category::ImprovePerformance,
        Category::AddComments,
        Category::UpdateReadme,
        Category::FixTypo,
        Category::OptimizeCode,
        Category::AddTests,
        Category::EnhanceUi,
        Category::UpdateConfig,
        Category::ImproveLogging,
        Category::AddValidation,
        Category::FixSecurityIssue,
        Category::UpdateApi,
        Category::ImproveErrorHandling,
        Category::AddMonitoring,
        Category::UpdateDatabaseSchema,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::UpdateDocumentation => "Update documentation",
            Category::FixMinorBug => "Fix minor bug",
            Category::AddNewFeature => "Add new feature",
            Category::RefactorCode => "Refactor code",
            Category::UpdateDependencies => "Update dependencies",
            Category::ImprovePerformance => "Improve performance",
            Category::AddComments => "Add comments",
            Category::UpdateReadme => "Update README",
            Category::FixTypo => "Fix typo",
            Category::OptimizeCode => "Optimize code",
            Category::AddTests => "Add tests",
            Category::EnhanceUi => "Enhance UI",
            Category::UpdateConfig => "Update config",
            Category::ImproveLogging => "Improve logging",
            Category::AddValidation => "Add validation",
            Category::FixSecurityIssue => "Fix security issue",
            Category::UpdateApi => "Update API",
            Category::ImproveErrorHandling => "Improve error handling",
            Category::AddMonitoring => "Add monitoring",
            Category::UpdateDatabaseSchema => "Update database schema",
        }
    }

    pub fn template(&self) -> &'static Template {
        Template::for_category(*self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which slice of the category table a run draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySet {
    #[default]
    Core,
    Extended,
}

impl CategorySet {
    pub fn categories(&self) -> &'static [Category] {
        match self {
            CategorySet::Core => &Category::ALL[..CORE_CATEGORY_COUNT],
            CategorySet::Extended => &Category::ALL,
        }
    }
}
