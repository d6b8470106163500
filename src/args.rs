// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser)]
#[command(name = "dependency_visualizer")]
#[command(version)]
#[command(about = "Dependency graph visualizer prototype")]
#[command(args_override_self = true)]
pub(crate) struct Args {
    /// Name of the package to analyze.
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub package: String,

    /// URL or filesystem path of the test repository.
    #[arg(long)]
    pub repo: String,

    /// How to access the test repository: local or remote.
    // Free text: unknown modes are reported by the validator.
    #[arg(long = "repo_mode", value_name = "REPO_MODE")]
    pub repo_mode: String,

    /// File name of the graph image.
    #[arg(long)]
    pub output: String,

    /// Substring for filtering packages.
    #[arg(long, default_value = "")]
    pub filter: String,
}
