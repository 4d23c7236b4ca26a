use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};

use crate::modules::models::race::format_time;

/// # elapsed time formatting helper
/// a formatter to display an elapsed race time, racers without a recorded
/// time render as DNF
///
/// ### usage
/// ```handlebars
/// {{formatTime 61.2}}
/// {{formatTime null}}
/// ```
///
/// ### output
/// ```text
/// 61.2s
/// DNF
/// ```
#[derive(Clone, Copy)]
pub struct FormatTimeHelper;

impl HelperDef for FormatTimeHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let time_param = helper.param(0);

        if time_param.is_none() {
            return Ok(());
        }

        let elapsed_time: Option<f64> = time_param.unwrap().value().as_f64();
        out.write(&format_time(elapsed_time))?;

        Ok(())
    }
}

pub fn check_param_count(h: &Helper, n: u64) -> Result<(), RenderError> {
    if h.params().len() != n as usize {
        return Err(RenderError::new::<String>(format!(
            "Wrong number of arguments for helper \"{}\", {n} was expected but {} were given",
            h.name(),
            h.params().len()
        )));
    }

    Ok(())
}
