use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::interactions::InteractionError;

/// Discord application command option type for strings
pub const STRING_OPTION_TYPE: u8 = 3;

/// The fixed set of slash commands this bot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCommand {
    GenDog,
    GenCat,
}

impl ImageCommand {
    pub const ALL: [ImageCommand; 2] = [ImageCommand::GenDog, ImageCommand::GenCat];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCommand::GenDog => "gendog",
            ImageCommand::GenCat => "gencat",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ImageCommand::GenDog => "Generate a dog",
            ImageCommand::GenCat => "Generate a cat",
        }
    }
}

impl fmt::Display for ImageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageCommand {
    type Err = InteractionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ImageCommand::ALL
            .into_iter()
            .find(|command| command.as_str() == name)
            .ok_or_else(|| InteractionError::UnknownCommand(name.to_string()))
    }
}

/// Body element of `PUT /applications/{id}/commands`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOptionDefinition>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommandOptionDefinition {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl From<ImageCommand> for CommandDefinition {
    fn from(command: ImageCommand) -> Self {
        CommandDefinition {
            name: command.as_str().to_string(),
            description: command.description().to_string(),
            options: vec![CommandOptionDefinition {
                kind: STRING_OPTION_TYPE,
                name: "prompt".to_string(),
                description: "Generation prompt".to_string(),
                required: true,
            }],
        }
    }
}
