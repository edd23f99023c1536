//! Genre rows
//!
//! `AddGenreRow ws, r, name, tempo, styleTags, structure, exclude, sfx,
//! core, tech, anthem, style, group, perf, hookPlan, flowPlan, rhymePlan`
//!
//! The six weights are grouped under `weights` when serialized; everything else keeps
//! its positional order.

use super::{ArityError, Record, RecordKind};
use crate::rgf::extraction::CallRow;
use crate::rgf::token::ArgValue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreRow {
    pub name: ArgValue,
    pub tempo: ArgValue,
    pub style_tags: ArgValue,
    pub structure: ArgValue,
    pub exclude: ArgValue,
    pub sfx: ArgValue,
    pub weights: GenreWeights,
    pub hook_plan: ArgValue,
    pub flow_plan: ArgValue,
    pub rhyme_plan: ArgValue,
}

/// Scoring weights, in the order the macro passes them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreWeights {
    pub core: ArgValue,
    pub tech: ArgValue,
    pub anthem: ArgValue,
    pub style: ArgValue,
    pub group: ArgValue,
    pub perf: ArgValue,
}

impl Record for GenreRow {
    const KIND: RecordKind = RecordKind::Genre;
    const ARITY: usize = 15;

    fn from_row(row: CallRow) -> Result<Self, ArityError> {
        let CallRow { line, args } = row;
        let [name, tempo, style_tags, structure, exclude, sfx, core, tech, anthem, style, group, perf, hook_plan, flow_plan, rhyme_plan] =
            <[ArgValue; 15]>::try_from(args)
                .map_err(|args| ArityError::new(Self::KIND, line, args))?;

        Ok(GenreRow {
            name,
            tempo,
            style_tags,
            structure,
            exclude,
            sfx,
            weights: GenreWeights {
                core,
                tech,
                anthem,
                style,
                group,
                perf,
            },
            hook_plan,
            flow_plan,
            rhyme_plan,
        })
    }
}
