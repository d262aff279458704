//! Glue code tying the session, narrative text and prompts together.
use std::io::{BufRead, Write};

use anyhow::Result;

use lineage_core::{
    Attribute, Character, CharacterSpec, ClassKind, GameError, PcgRng, RngOracle, Session,
    narrative,
};

use crate::config::{CliConfig, clock_seed};
use crate::input::Prompter;

pub const QUIT: &str = "quit";
pub const FAREWELL: &str = "see ya!";

pub struct CliApp<R = PcgRng> {
    session: Session<R>,
}

pub struct CliAppBuilder {
    config: CliConfig,
}

impl CliAppBuilder {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<CliApp> {
        let game_config = self.config.game_config()?;
        let seed = game_config.seed.unwrap_or_else(clock_seed);

        tracing::info!(
            seed,
            generations = game_config.bootstrap_generations,
            "Session configured"
        );

        Ok(CliApp::new(Session::seeded(game_config, seed)))
    }
}

impl CliApp {
    pub fn builder(config: CliConfig) -> CliAppBuilder {
        CliAppBuilder::new(config)
    }
}

impl<R: RngOracle> CliApp<R> {
    pub fn new(session: Session<R>) -> Self {
        Self { session }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Run against the process stdin/stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Bootstrap the lineage, print the summaries, then run the interactive
    /// loop until the player answers `quit` or input runs out.
    pub fn run_with(&mut self, input: impl BufRead, output: impl Write) -> Result<()> {
        let mut prompter = Prompter::new(input, output);

        self.bootstrap(&mut prompter)?;
        self.print_summaries(&mut prompter)?;

        while let Some(spec) = Self::read_spec(&mut prompter)? {
            let character = self.session.birth(spec);
            log_birth(character);
            announce(&mut prompter, character)?;

            let Some(answer) = prompter.ask("Create a new character? 'quit' to exit ")? else {
                break;
            };
            if answer == QUIT {
                break;
            }
        }

        tracing::info!(members = self.session.lineage().len(), "Session finished");
        prompter.say(FAREWELL)?;
        Ok(())
    }

    fn bootstrap<I: BufRead, O: Write>(&mut self, prompter: &mut Prompter<I, O>) -> Result<()> {
        tracing::debug!(
            generations = self.session.config().bootstrap_generations,
            "Generating ancestors"
        );

        let mut io_result = Ok(());
        self.session.bootstrap(|character| {
            log_birth(character);
            if io_result.is_ok() {
                io_result = announce(prompter, character);
            }
        });
        io_result
    }

    fn print_summaries<I: BufRead, O: Write>(&self, prompter: &mut Prompter<I, O>) -> Result<()> {
        let lineage = self.session.lineage();
        let classes = lineage.class_counts();
        let tiers = lineage.tier_counts();

        tracing::info!(?classes, ?tiers, "Lineage summary");

        prompter.say(narrative::family_tree_types(&classes))?;
        prompter.say(narrative::family_tree_super_inheritances(&tiers))?;
        Ok(())
    }

    /// Collect one character's choices. `None` when input runs out midway.
    fn read_spec<I: BufRead, O: Write>(
        prompter: &mut Prompter<I, O>,
    ) -> Result<Option<CharacterSpec>> {
        let Some(name) = prompter.ask("Your character's name? ")? else {
            return Ok(None);
        };

        let Some(class_input) = prompter.ask("Your character's class? ")? else {
            return Ok(None);
        };
        let class = ClassKind::parse_or_mage(&class_input);
        if class.as_ref() != class_input {
            tracing::warn!(input = %class_input, "Unrecognised class, defaulting to mage");
        }

        let Some(weapon) = prompter.ask("Your character's weapon? ")? else {
            return Ok(None);
        };

        let Some(attribute) = Self::read_attribute(prompter)? else {
            return Ok(None);
        };

        let Some(ability) = prompter.ask("Your character's ability? ")? else {
            return Ok(None);
        };

        Ok(Some(CharacterSpec::new(name, class, weapon, attribute, ability)))
    }

    /// Ask for the special attribute until a valid one is given.
    fn read_attribute<I: BufRead, O: Write>(
        prompter: &mut Prompter<I, O>,
    ) -> Result<Option<Attribute>> {
        loop {
            let Some(input) = prompter.ask("Your character's special attribute? str/agl/int ")?
            else {
                return Ok(None);
            };

            match input.parse::<Attribute>() {
                Ok(attribute) => return Ok(Some(attribute)),
                Err(err) if err.severity().should_reprompt() => {
                    tracing::warn!(
                        code = err.error_code(),
                        severity = err.severity().as_str(),
                        "{}",
                        err
                    );
                    prompter.say(format!("{err}, try again."))?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Print a birth announcement, with a blank line after the introduction and
/// after the stats.
fn announce<I: BufRead, O: Write>(
    prompter: &mut Prompter<I, O>,
    character: &Character,
) -> Result<()> {
    let introduction = narrative::introduction(character);
    for line in narrative::birth(character) {
        let spaced = line == introduction;
        prompter.say(line)?;
        if spaced {
            prompter.say("")?;
        }
    }
    prompter.say("")?;
    Ok(())
}

fn log_birth(character: &Character) {
    let inheritance = character.inheritance();
    tracing::debug!(
        name = character.name(),
        class = %character.class(),
        tier = ?inheritance.tier,
        bonus = %inheritance.bonus,
        stats = %character.stats(),
        "Character born"
    );
}
