/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::fonts::{FontDescriptor, FontMetrics, FontMetricsProvider};
use crate::options::LayoutOptions;

/// State shared by every formatting context of one layout pass.
pub struct LayoutContext<'a> {
    /// Interface to the text measurement service.
    pub font_metrics: &'a dyn FontMetricsProvider,

    pub options: &'a LayoutOptions,
}

impl<'a> LayoutContext<'a> {
    pub fn new(font_metrics: &'a dyn FontMetricsProvider, options: &'a LayoutOptions) -> Self {
        Self {
            font_metrics,
            options,
        }
    }

    #[inline]
    pub fn metrics_for(&self, font: &FontDescriptor) -> FontMetrics {
        self.font_metrics.metrics(font)
    }
}
