use clap::{Args, Parser, Subcommand};
use recipebox::form::FormFields;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipebox", bin_name = "recipebox", version)]
#[command(about = "Add, edit and delete recipes on a remote recipe store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the recipe store (overrides config and RECIPEBOX_API_URL)
    #[arg(long, global = true, value_name = "URL", help_heading = "Options")]
    pub api_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes
    #[command(alias = "ls", display_order = 1)]
    List,

    /// Show one recipe in full
    #[command(alias = "v", display_order = 2)]
    View {
        /// Position in the list (1-based)
        index: usize,
    },

    /// Add a recipe
    #[command(alias = "a", display_order = 3)]
    Add {
        #[command(flatten)]
        fields: RecipeArgs,
    },

    /// Edit a recipe; fields not given keep their current value
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Position in the list (1-based)
        index: usize,

        #[command(flatten)]
        fields: RecipeArgs,
    },

    /// Delete a recipe
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Position in the list (1-based)
        index: usize,
    },

    /// Render the HTML page
    #[command(display_order = 6)]
    Page {
        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show or set configuration (api-url, refresh, timeout)
    #[command(display_order = 7)]
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct RecipeArgs {
    /// Recipe name
    #[arg(short, long)]
    pub name: Option<String>,

    /// One ingredient; repeat for more
    #[arg(short = 'i', long = "ingredient", value_name = "INGREDIENT")]
    pub ingredients: Vec<String>,

    /// One step; repeat for more
    #[arg(short = 's', long = "step", value_name = "STEP")]
    pub steps: Vec<String>,

    /// Image URL
    #[arg(long, value_name = "URL")]
    pub image: Option<String>,
}

impl RecipeArgs {
    /// Overlays the given arguments on `base`, one form line per repeated value.
    pub fn apply(self, mut base: FormFields) -> FormFields {
        if let Some(name) = self.name {
            base.name = name;
        }
        if !self.ingredients.is_empty() {
            base.ingredients = self.ingredients.join("\n");
        }
        if !self.steps.is_empty() {
            base.steps = self.steps.join("\n");
        }
        if let Some(image) = self.image {
            base.image = image;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("recipebox").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_command_means_list() {
        assert!(parse(&[]).command.is_none());
        assert!(matches!(parse(&["ls"]).command, Some(Commands::List)));
    }

    #[test]
    fn add_collects_repeated_values() {
        let cli = parse(&[
            "add", "--name", "Soup", "-i", "water", "-i", "salt", "-s", "Boil", "-s", "Serve",
            "--image", "http://x/img.png",
        ]);

        let Some(Commands::Add { fields }) = cli.command else {
            panic!("expected add");
        };
        let form = fields.apply(FormFields::default());
        assert_eq!(
            form,
            FormFields::new("Soup", "water\nsalt", "Boil\nServe", "http://x/img.png")
        );
    }

    #[test]
    fn edit_keeps_unspecified_fields() {
        let cli = parse(&["e", "2", "--name", "Stew"]);

        let Some(Commands::Edit { index, fields }) = cli.command else {
            panic!("expected edit");
        };
        let base = FormFields::new("Soup", "water\nsalt", "Boil", "http://x/img.png");
        let form = fields.apply(base);

        assert_eq!(index, 2);
        assert_eq!(form.name, "Stew");
        assert_eq!(form.ingredients, "water\nsalt");
        assert_eq!(form.steps, "Boil");
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = parse(&["rm", "3", "--api-url", "http://h:1", "-v"]);

        assert!(matches!(cli.command, Some(Commands::Delete { index: 3 })));
        assert_eq!(cli.api_url.as_deref(), Some("http://h:1"));
        assert!(cli.verbose);
    }

    #[test]
    fn index_must_be_a_number() {
        assert!(Cli::try_parse_from(["recipebox", "view", "first"]).is_err());
    }
}
