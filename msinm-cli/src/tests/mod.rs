//! Shared test harness modules for the msinm CLI.

use super::*;
