use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skillport completions bash > ~/.bash_completion.d/skillport\n\n\
                  Generate zsh completions:\n    skillport completions zsh > ~/.zfunc/_skillport\n\n\
                  Generate fish completions:\n    skillport completions fish > ~/.config/fish/completions/skillport.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
