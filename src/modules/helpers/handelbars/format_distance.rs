use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

use crate::modules::helpers::handelbars::format_time::check_param_count;
use crate::modules::models::race::format_distance;

/// # distance formatting helper
/// a formatter to display a travelled distance
///
/// ### usage
/// ```handlebars
/// {{formatDistance 123.45}}
/// ```
///
/// ### output
/// ```text
/// 123.5m
/// ```
#[derive(Clone, Copy)]
pub struct FormatDistanceHelper;

impl HelperDef for FormatDistanceHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let distance_param = helper.param(0);

        if distance_param.is_none() {
            return Ok(());
        }

        match distance_param.unwrap().value().as_f64() {
            Some(distance) => out.write(&format_distance(distance))?,
            None => out.write("")?,
        }

        Ok(())
    }
}
