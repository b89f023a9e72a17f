//! Main entry point for ForkparamsCli

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use forkparams_cli::application::APP;

/// Boot ForkparamsCli
fn main() {
    abscissa_core::boot(&APP);
}
