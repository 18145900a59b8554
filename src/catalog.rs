// SPDX-License-Identifier: MIT

//! Example expressions grouped by category

use serde::Serialize;

/// A named group of example expressions
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExampleCategory {
    pub name: &'static str,
    pub expressions: &'static [&'static str],
}

pub const EXAMPLE_CATEGORIES: &[ExampleCategory] = &[
    ExampleCategory {
        name: "String Operations",
        expressions: &[
            "concat([name], ' from ', [city])",
            "contains([city], 'o')",
            "length([name])",
            "uppercase([name])",
        ],
    },
    ExampleCategory {
        name: "Numeric Operations",
        expressions: &["[salary] / 12", "round([salary] / 1000, 1)", "[age] > 35"],
    },
    ExampleCategory {
        name: "Date Operations",
        expressions: &[
            "year(to_date([joined_date]))",
            "date_diff_days(to_date([joined_date]), to_date('2023-01-01'))",
        ],
    },
    ExampleCategory {
        name: "Conditional Logic",
        expressions: &[
            "if [age] > 40 then 'Senior' else 'Junior' endif",
            "if [salary] > 100000 then 'High' elseif [salary] > 80000 then 'Medium' else 'Standard' endif",
            "if contains([city], 'o') then length([city]) else 0 endif",
        ],
    },
    ExampleCategory {
        name: "Combined Examples",
        expressions: &[
            "concat([city], ': ', if [salary] > 90000 then 'High' else 'Standard' endif)",
            "concat('Joined in ', year(to_date([joined_date])), ', Age: ', [age])",
        ],
    },
];

/// Look up a category by case-insensitive name
pub fn find_category(name: &str) -> Option<&'static ExampleCategory> {
    EXAMPLE_CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}
