use core::fmt;

/// Category of a response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 1xx
    Informational,
    /// 2xx
    Successful,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// Anything outside 100..600
    Other,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Informational => "informational",
            Category::Successful => "successful",
            Category::Redirection => "redirection",
            Category::ClientError => "client error",
            Category::ServerError => "server error",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct CategoryRange {
    category: Category,
    lo: i64,
}

impl CategoryRange {
    const WIDTH: i64 = 100;

    const fn contains(&self, code: i64) -> bool {
        code >= self.lo && code < self.lo + Self::WIDTH
    }
}

const CATEGORY_RANGES: [CategoryRange; 5] = [
    CategoryRange {
        category: Category::Informational,
        lo: 100,
    },
    CategoryRange {
        category: Category::Successful,
        lo: 200,
    },
    CategoryRange {
        category: Category::Redirection,
        lo: 300,
    },
    CategoryRange {
        category: Category::ClientError,
        lo: 400,
    },
    CategoryRange {
        category: Category::ServerError,
        lo: 500,
    },
];

/// Map a status code to its [`Category`]. First matching range wins; no match is `Other`.
#[must_use]
pub const fn classify(code: i64) -> Category {
    let mut i = 0;
    while i < CATEGORY_RANGES.len() {
        if CATEGORY_RANGES[i].contains(code) {
            return CATEGORY_RANGES[i].category;
        }
        i += 1;
    }
    Category::Other
}

/// A response status code together with its category, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status {
    code: i64,
    category: Category,
}

impl Status {
    /// 200 OK
    pub const OK: Status = Status::new(200);

    /// Wrap `code`, usually a [`crate::Response::code`].
    #[must_use]
    pub const fn new(code: i64) -> Self {
        Self {
            code,
            category: classify(code),
        }
    }

    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// `true` for 2xx only.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.category, Category::Successful)
    }

    /// `true` for 4xx and 5xx. 1xx and 3xx are neither success nor error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.category, Category::ClientError | Category::ServerError)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::new(0)
    }
}

impl From<i64> for Status {
    fn from(code: i64) -> Self {
        Status::new(code)
    }
}

impl From<Status> for i64 {
    fn from(status: Status) -> Self {
        status.code
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
