/*
 * SPDX-FileCopyrightText: 2026 Integrity Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;

use super::input::port_in_range;
use super::registry::ProjectRegistry;

#[derive(Parser, Debug)]
#[command(name = "Integrity", display_name = "Integrity", bin_name = "integrity-server", author = "Integrity Contributors", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "INTEGRITY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "INTEGRITY_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "INTEGRITY_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "INTEGRITY_ADMIN_USER", default_value = "admin")]
    pub admin_user: String,
    #[arg(long, env = "INTEGRITY_ADMIN_PASSWORD")]
    pub admin_password: Option<String>,
    #[arg(long, env = "INTEGRITY_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
    #[arg(long, env = "INTEGRITY_PROJECTS_FILE")]
    pub projects_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub registry: ProjectRegistry,
    pub admin_password: String,
    pub cli: Cli,
}
