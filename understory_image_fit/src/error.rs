// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// A rejected configuration value.
///
/// Configuration calls validate their input up front; a rejected call leaves
/// the previous configuration in place.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A padding inset was negative.
    #[error("padding cannot be negative (left {left}, top {top}, right {right}, bottom {bottom})")]
    NegativePadding {
        /// Requested left padding.
        left: i32,
        /// Requested top padding.
        top: i32,
        /// Requested right padding.
        right: i32,
        /// Requested bottom padding.
        bottom: i32,
    },
    /// A translation-extra inset was negative.
    #[error(
        "translation extra cannot be less than 0 (left {left}, top {top}, right {right}, bottom {bottom}); \
         use padding combined with crop-to-padding instead"
    )]
    NegativeTranslationExtra {
        /// Requested left slack.
        left: i32,
        /// Requested top slack.
        top: i32,
        /// Requested right slack.
        right: i32,
        /// Requested bottom slack.
        bottom: i32,
    },
    /// A minimum bitmap size was below one pixel on some axis.
    #[error("minimum bitmap width and height must be greater than 0 (got {width}x{height})")]
    InvalidMinimumSize {
        /// Requested minimum width.
        width: i32,
        /// Requested minimum height.
        height: i32,
    },
    /// A maximum bitmap size was negative on some axis.
    #[error("maximum bitmap width and height cannot be negative (got {width}x{height})")]
    NegativeMaximumSize {
        /// Requested maximum width.
        width: i32,
        /// Requested maximum height.
        height: i32,
    },
    /// The pan threshold was below one pixel.
    #[error("pan threshold must be greater than 0 (got {0})")]
    InvalidPanThreshold(i32),
}
