// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Consumers for the clique stream.
//!
//! A sink receives each maximal clique as a borrowed slice the moment it is
//! found and answers with [`ControlFlow`]: `Break` stops the search after
//! that clique and nothing further is emitted.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::graph::Vertex;

/// A maximal clique, in the order its vertices were committed.
pub type Clique = Vec<Vertex>;

/// Receives cliques as they are found.
pub trait CliqueSink {
    fn push(&mut self, clique: &[Vertex]) -> ControlFlow<()>;
}

impl CliqueSink for Vec<Clique> {
    fn push(&mut self, clique: &[Vertex]) -> ControlFlow<()> {
        Vec::push(self, clique.to_vec());
        ControlFlow::Continue(())
    }
}

impl<S: CliqueSink + ?Sized> CliqueSink for &mut S {
    fn push(&mut self, clique: &[Vertex]) -> ControlFlow<()> {
        (**self).push(clique)
    }
}

/// Counts cliques without storing them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueCounter {
    pub count: usize,
    pub largest: usize,
}

impl CliqueSink for CliqueCounter {
    fn push(&mut self, clique: &[Vertex]) -> ControlFlow<()> {
        self.count += 1;
        self.largest = self.largest.max(clique.len());
        ControlFlow::Continue(())
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> CliqueSink for FnSink<F>
where
    F: FnMut(&[Vertex]) -> ControlFlow<()>,
{
    fn push(&mut self, clique: &[Vertex]) -> ControlFlow<()> {
        (self.0)(clique)
    }
}

/// Outcome of driving a search into a sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Cliques handed to the sink, including the one that requested a stop.
    pub emitted: usize,
    /// Whether the sink stopped the search early.
    pub aborted: bool,
}
