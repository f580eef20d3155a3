// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Statistics which collapse a returns frame along its time axis.
//!
//! Each statistic is available as a free function and as a [`FrameStatistic`] type for
//! registration with a [`ReturnsAnalyzer`].
//!
//! [`FrameStatistic`]: crate::statistic::FrameStatistic
//! [`ReturnsAnalyzer`]: crate::analyzer::ReturnsAnalyzer

pub mod annualized_return;
pub mod annualized_volatility;
pub mod compound_return;
pub mod volatility;

pub use annualized_return::{AnnualizedReturn, annualized_return};
pub use annualized_volatility::{AnnualizedVolatility, annualized_volatility};
pub use compound_return::{CompoundReturn, compound_return};
pub use volatility::{Volatility, volatility};
