mod card_flow;
mod config_file;
mod evasion;
