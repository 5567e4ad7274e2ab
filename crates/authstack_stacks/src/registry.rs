//! Registry of the bundled stack recipes.

use crate::context::StackContext;
use crate::error::StackResult;
use authstack_graph::StackDefinition;

/// Signature every recipe shares: stack name in, finished definition out.
pub type RecipeFn = fn(&str, &StackContext) -> StackResult<StackDefinition>;

/// A named stack recipe.
pub struct Recipe {
    /// Registry key and default stack name.
    pub name: &'static str,
    /// One-line summary for listings.
    pub description: &'static str,
    build: RecipeFn,
}

impl Recipe {
    /// Run the recipe under its default stack name.
    pub fn run(&self, ctx: &StackContext) -> StackResult<StackDefinition> {
        (self.build)(self.name, ctx)
    }

    /// Run the recipe under a caller-chosen stack name.
    pub fn run_as(&self, name: &str, ctx: &StackContext) -> StackResult<StackDefinition> {
        (self.build)(name, ctx)
    }
}

const RECIPES: &[Recipe] = &[
    Recipe {
        name: "basic-native",
        description: "Native app with API, grant, connection and user",
        build: crate::recipes::basic_native::build,
    },
    Recipe {
        name: "password-grant",
        description: "Regular-web app with password grants and tenant default directory",
        build: crate::recipes::password_grant::build,
    },
    Recipe {
        name: "passwordless-sms",
        description: "Passwordless SMS login over Twilio with classic login page",
        build: crate::recipes::passwordless_sms::build,
    },
    Recipe {
        name: "custom-error-page",
        description: "SPA with email-verification rule and tenant error page",
        build: crate::recipes::custom_error_page::build,
    },
    Recipe {
        name: "actions",
        description: "Post-login actions bound to the login flow",
        build: crate::recipes::actions::build,
    },
];

/// All bundled recipes, in listing order.
pub fn recipes() -> &'static [Recipe] {
    RECIPES
}

/// Look up a recipe by name.
pub fn recipe(name: &str) -> Option<&'static Recipe> {
    recipes().iter().find(|r| r.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_recipes_registered() {
        let names: Vec<_> = recipes().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "basic-native",
                "password-grant",
                "passwordless-sms",
                "custom-error-page",
                "actions"
            ]
        );
    }

    #[test]
    fn test_lookup_unknown_recipe() {
        assert!(recipe("basic-native").is_some());
        assert!(recipe("nope").is_none());
    }
}
