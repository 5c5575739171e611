//! `ShortcutManager` access over JNI.
//!
//! Every call attaches the current thread to the JVM, works against the
//! application context provided by `ndk-context`, and clears any Java
//! exception it raises so the message can be returned as a [`PlatformError`].

#![cfg(target_os = "android")]

use jni::objects::{JObject, JString, JValue};
use jni::JNIEnv;
use tracing::{debug, warn};

use crate::models::*;
use crate::platform::{PlatformError, ShortcutPlatform};

const SHORTCUT_MANAGER: &str = "android/content/pm/ShortcutManager";
const SHORTCUT_BUILDER: &str = "android/content/pm/ShortcutInfo$Builder";
const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// `PendingIntent.FLAG_IMMUTABLE`
const FLAG_IMMUTABLE: i32 = 0x0400_0000;

pub struct AndroidPlatform {
    icon_resource_type: String,
}

impl AndroidPlatform {
    pub fn new(config: &Config) -> Self {
        Self {
            icon_resource_type: config.icon_resource_type.clone(),
        }
    }
}

impl ShortcutPlatform for AndroidPlatform {
    fn api_level(&self) -> Option<u32> {
        match with_context(|env, _| sdk_int(env)) {
            Ok(level) => u32::try_from(level).ok(),
            Err(e) => {
                warn!("Failed to read Build.VERSION.SDK_INT: {}", e);
                None
            }
        }
    }

    fn pin_support(&self) -> Result<PinSupport, PlatformError> {
        with_context(|env, context| {
            let manager = shortcut_manager(env, context)?;
            if manager.is_null() {
                return Ok(PinSupport::ServiceUnavailable);
            }
            let supported = env
                .call_method(&manager, "isRequestPinShortcutSupported", "()Z", &[])?
                .z()?;
            Ok(if supported {
                PinSupport::Supported
            } else {
                PinSupport::Unsupported
            })
        })
    }

    fn resolve_icon(&self, name: &str) -> Result<Option<IconResource>, PlatformError> {
        with_context(|env, context| {
            let resources = env
                .call_method(context, "getResources", "()Landroid/content/res/Resources;", &[])?
                .l()?;
            let package = package_name(env, context)?;
            let j_name = env.new_string(name)?;
            let j_type = env.new_string(&self.icon_resource_type)?;

            let id = env
                .call_method(
                    &resources,
                    "getIdentifier",
                    "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;)I",
                    &[(&j_name).into(), (&j_type).into(), (&package).into()],
                )?
                .i()?;

            debug!("Icon '{}' resolved to resource id {:#x}", name, id);
            Ok((id != 0).then(|| IconResource {
                name: name.to_string(),
                id,
            }))
        })
    }

    fn request_pin(&self, shortcut: &ShortcutDescriptor) -> Result<(), PlatformError> {
        with_context(|env, context| {
            let manager = shortcut_manager(env, context)?;
            if manager.is_null() {
                return Err(jni::errors::Error::NullPtr("ShortcutManager"));
            }

            let info = build_shortcut_info(env, context, shortcut)?;

            // The OS broadcasts this intent once the user accepts the pin.
            // Nothing in the app listens for it.
            let result_intent = env
                .call_method(
                    &manager,
                    "createShortcutResultIntent",
                    "(Landroid/content/pm/ShortcutInfo;)Landroid/content/Intent;",
                    &[(&info).into()],
                )?
                .l()?;
            let pending = env
                .call_static_method(
                    "android/app/PendingIntent",
                    "getBroadcast",
                    "(Landroid/content/Context;ILandroid/content/Intent;I)Landroid/app/PendingIntent;",
                    &[
                        context.into(),
                        JValue::Int(0),
                        (&result_intent).into(),
                        JValue::Int(FLAG_IMMUTABLE),
                    ],
                )?
                .l()?;
            let sender = env
                .call_method(&pending, "getIntentSender", "()Landroid/content/IntentSender;", &[])?
                .l()?;

            env.call_method(
                &manager,
                "requestPinShortcut",
                "(Landroid/content/pm/ShortcutInfo;Landroid/content/IntentSender;)Z",
                &[(&info).into(), (&sender).into()],
            )?;
            Ok(())
        })
    }
}

/// Run `f` on an attached JNI environment with the application context.
///
/// A Java exception thrown inside `f` is cleared and its message returned.
fn with_context<T, F>(f: F) -> Result<T, PlatformError>
where
    F: for<'local> FnOnce(&mut JNIEnv<'local>, &JObject<'local>) -> jni::errors::Result<T>,
{
    let ctx = ndk_context::android_context();
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }.map_err(jni_error)?;
    let mut env = vm.attach_current_thread().map_err(jni_error)?;
    let context = unsafe { JObject::from_raw(ctx.context().cast()) };

    // Local refs made by `f` are released when the frame pops, even if this
    // thread was already attached and never returns to Java.
    let result = env.with_local_frame(32, |env| -> jni::errors::Result<T> {
        let context = env.new_local_ref(&context)?;
        f(env, &context)
    });

    match result {
        Ok(value) => Ok(value),
        Err(jni::errors::Error::JavaException) => Err(take_exception(&mut *env)),
        Err(e) => Err(jni_error(e)),
    }
}

fn jni_error(err: jni::errors::Error) -> PlatformError {
    PlatformError::new(format!("JNI error: {}", err))
}

/// Clear the pending Java exception and return its message.
fn take_exception(env: &mut JNIEnv) -> PlatformError {
    let throwable = match env.exception_occurred() {
        Ok(t) if !t.is_null() => t,
        _ => return PlatformError::new("unknown Java exception"),
    };
    let _ = env.exception_clear();

    let message = env
        .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .and_then(|obj| {
            let text = JString::from(obj);
            env.get_string(&text).map(String::from)
        });

    match message {
        Ok(msg) => PlatformError::new(msg),
        Err(_) => {
            if env.exception_check().unwrap_or(false) {
                let _ = env.exception_clear();
            }
            PlatformError::new("Java exception without message")
        }
    }
}

fn sdk_int(env: &mut JNIEnv) -> jni::errors::Result<i32> {
    env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")?
        .i()
}

fn shortcut_manager<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject<'local>,
) -> jni::errors::Result<JObject<'local>> {
    let class = env.find_class(SHORTCUT_MANAGER)?;
    env.call_method(
        context,
        "getSystemService",
        "(Ljava/lang/Class;)Ljava/lang/Object;",
        &[(&class).into()],
    )?
    .l()
}

fn package_name<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject<'local>,
) -> jni::errors::Result<JObject<'local>> {
    env.call_method(context, "getPackageName", "()Ljava/lang/String;", &[])?
        .l()
}

fn build_shortcut_info<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject<'local>,
    shortcut: &ShortcutDescriptor,
) -> jni::errors::Result<JObject<'local>> {
    let intent = launch_intent(env, context, &shortcut.intent)?;

    let icon = env
        .call_static_method(
            "android/graphics/drawable/Icon",
            "createWithResource",
            "(Landroid/content/Context;I)Landroid/graphics/drawable/Icon;",
            &[context.into(), JValue::Int(shortcut.icon.id)],
        )?
        .l()?;

    let j_id = env.new_string(&shortcut.id)?;
    let builder = env.new_object(
        SHORTCUT_BUILDER,
        "(Landroid/content/Context;Ljava/lang/String;)V",
        &[context.into(), (&j_id).into()],
    )?;

    let short_label = env.new_string(&shortcut.short_label)?;
    env.call_method(
        &builder,
        "setShortLabel",
        "(Ljava/lang/CharSequence;)Landroid/content/pm/ShortcutInfo$Builder;",
        &[(&short_label).into()],
    )?;
    env.call_method(
        &builder,
        "setIcon",
        "(Landroid/graphics/drawable/Icon;)Landroid/content/pm/ShortcutInfo$Builder;",
        &[(&icon).into()],
    )?;
    env.call_method(
        &builder,
        "setIntent",
        "(Landroid/content/Intent;)Landroid/content/pm/ShortcutInfo$Builder;",
        &[(&intent).into()],
    )?;

    if let Some(long_label) = &shortcut.long_label {
        let long_label = env.new_string(long_label)?;
        env.call_method(
            &builder,
            "setLongLabel",
            "(Ljava/lang/CharSequence;)Landroid/content/pm/ShortcutInfo$Builder;",
            &[(&long_label).into()],
        )?;
    }

    env.call_method(&builder, "build", "()Landroid/content/pm/ShortcutInfo;", &[])?
        .l()
}

/// `ACTION_VIEW` intent for the shortcut URI, restricted to our own package.
fn launch_intent<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject<'local>,
    launch: &LaunchIntent,
) -> jni::errors::Result<JObject<'local>> {
    let j_uri_str = env.new_string(&launch.uri)?;
    let uri = env
        .call_static_method(
            "android/net/Uri",
            "parse",
            "(Ljava/lang/String;)Landroid/net/Uri;",
            &[(&j_uri_str).into()],
        )?
        .l()?;

    let action = env.new_string(ACTION_VIEW)?;
    let intent = env.new_object(
        "android/content/Intent",
        "(Ljava/lang/String;Landroid/net/Uri;)V",
        &[(&action).into(), (&uri).into()],
    )?;

    let package = package_name(env, context)?;
    env.call_method(
        &intent,
        "setPackage",
        "(Ljava/lang/String;)Landroid/content/Intent;",
        &[(&package).into()],
    )?;
    env.call_method(
        &intent,
        "setFlags",
        "(I)Landroid/content/Intent;",
        &[JValue::Int(launch.flags)],
    )?;

    Ok(intent)
}
