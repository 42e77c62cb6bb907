//! Running configuration tests inside a [`figment::Jail`].
//!
//! The jail isolates environment variables and the working directory, so
//! tests that set `HTML_ATTRS_*` variables cannot leak into one another.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Sets each `(name, value)` pair in a fresh jail, then runs `f`.
///
/// # Errors
///
/// Returns an error if the jail cannot be created or the closure fails.
pub fn with_env<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    with_jail(|j| {
        for (name, value) in vars {
            j.set_env(name, value);
        }
        f(j)
    })
}

#[cfg(test)]
mod tests {
    use super::{with_env, with_jail};

    #[test]
    fn with_jail_returns_closure_output() {
        let value = with_jail(|_| Ok(7)).expect("jail");
        assert_eq!(value, 7);
    }

    #[test]
    fn with_env_sets_variables_for_the_closure() {
        let seen = with_env(&[("HTML_ATTRS_PROBE", "on")], |_| {
            Ok(std::env::var("HTML_ATTRS_PROBE").ok())
        })
        .expect("jail");
        assert_eq!(seen.as_deref(), Some("on"));
    }

    #[test]
    fn closure_errors_surface_as_anyhow() {
        let err = with_jail::<_, ()>(|_| Err(figment::Error::from("boom".to_owned())))
            .expect_err("closure fails");
        assert!(err.to_string().contains("boom"));
    }
}
