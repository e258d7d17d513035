use dioxus::prelude::*;

use crate::{
    domain::{
        error_for, wizard::MAX_DOCUMENT_BYTES, Currency, DocumentUpload, FieldError,
        PaymentDetailsForm, VerificationState, WizardStep,
    },
    infra::backend::MockBackend,
    ui::{
        components::{
            form_field::FormField,
            step_indicator::StepIndicator,
            toast::{push_toast, push_validation_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::assets,
};

/// Grabs one frame from the front camera and releases the device right away.
const CAPTURE_SCRIPT: &str = r#"
    const stream = await navigator.mediaDevices.getUserMedia({ video: { facingMode: "user" }, audio: false });
    try {
        const video = document.createElement("video");
        video.muted = true;
        video.playsInline = true;
        video.srcObject = stream;
        await video.play();
        await new Promise((resolve) => setTimeout(resolve, 400));
        const canvas = document.createElement("canvas");
        canvas.width = video.videoWidth || 640;
        canvas.height = video.videoHeight || 480;
        canvas.getContext("2d").drawImage(video, 0, 0, canvas.width, canvas.height);
        return canvas.toDataURL("image/jpeg", 0.85);
    } finally {
        stream.getTracks().forEach((track) => track.stop());
    }
"#;

#[component]
pub fn SupplierPaymentPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<MockBackend>();

    let mut wizard = use_signal(VerificationState::new);
    let mut form = use_signal(PaymentDetailsForm::default);
    let mut form_errors = use_signal(Vec::<FieldError>::new);
    let mut busy = use_signal(|| false);
    let mut camera_failed = use_signal(|| false);

    let current = wizard();
    let step = current.step;
    let complete = current.is_complete();

    let mut issue_reference = {
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            busy.set(true);
            spawn(async move {
                let reference = backend.issue_payment_reference().await;
                if let Err(err) = wizard.with_mut(|w| w.set_reference(reference)) {
                    push_toast(toasts, ToastKind::Error, err.to_string());
                }
                busy.set(false);
            });
        }
    };

    let on_next = move |_| {
        if busy() {
            return;
        }
        if wizard.with(|w| w.step) == WizardStep::PaymentDetails {
            let details = form();
            if let Err(found) = wizard.with_mut(|w| w.submit_payment_details(&details)) {
                push_validation_toast(toasts, &found);
                form_errors.set(found);
                return;
            }
            form_errors.set(Vec::new());
        }
        match wizard.with_mut(|w| w.advance()) {
            Ok(WizardStep::Reference) => issue_reference(),
            Ok(_) => {}
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let on_back = move |_| {
        if !busy() {
            wizard.with_mut(|w| {
                w.back();
            });
        }
    };

    let on_restart = move |_| {
        wizard.with_mut(|w| w.reset());
        form.set(PaymentDetailsForm::default());
        form_errors.set(Vec::new());
        camera_failed.set(false);
        push_toast(toasts, ToastKind::Info, "Started a new supplier payment.");
    };

    let on_verify = {
        let backend = backend.clone();
        move |_| {
            if busy() {
                return;
            }
            let snapshot = wizard();
            let backend = backend.clone();
            busy.set(true);
            spawn(async move {
                match backend.verify_identity(&snapshot).await {
                    Ok(()) => match wizard.with_mut(|w| w.mark_verified()) {
                        Ok(()) => push_toast(toasts, ToastKind::Success, "Identity verified."),
                        Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
                    },
                    Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
                }
                busy.set(false);
            });
        }
    };

    let body = match step {
        WizardStep::UploadId => rsx! {
            DocumentStep {
                document: current.identity_document.clone(),
                on_document: move |document: DocumentUpload| {
                    let name = document.file_name.clone();
                    match wizard.with_mut(|w| w.attach_document(document)) {
                        Ok(()) => push_toast(toasts, ToastKind::Success, format!("Attached {name}.")),
                        Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
                    }
                },
            }
        },
        WizardStep::Selfie => rsx! {
            SelfieStep {
                selfie: current.selfie_data_url.clone(),
                camera_failed: camera_failed(),
                busy: busy(),
                on_capture: move |_| {
                    busy.set(true);
                    spawn(async move {
                        match document::eval(CAPTURE_SCRIPT).join::<String>().await {
                            Ok(data_url) => attach_selfie(wizard, toasts, data_url),
                            Err(err) => {
                                tracing::warn!("camera capture failed: {err}");
                                camera_failed.set(true);
                                push_toast(
                                    toasts,
                                    ToastKind::Warning,
                                    "The camera is unavailable. Upload a photo of your face instead.",
                                );
                            }
                        }
                        busy.set(false);
                    });
                },
                on_photo: move |data_url: String| attach_selfie(wizard, toasts, data_url),
            }
        },
        WizardStep::PaymentDetails => rsx! {
            PaymentDetailsStep { form, errors: form_errors() }
        },
        WizardStep::Verify => rsx! {
            VerifyStep { verified: current.verified, busy: busy(), on_verify }
        },
        WizardStep::Reference => rsx! {
            ReferenceStep {
                reference: current.reference.clone(),
                details: form(),
            }
        },
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Pay a supplier abroad" }
                p { class: "text-sm text-slate-400",
                    "We pay your supplier in their currency once your identity is confirmed."
                }
            }
            StepIndicator { current: step }
            section { class: theme::PANEL, {body} }
            div { class: "flex items-center justify-between",
                if step == WizardStep::UploadId {
                    span {}
                } else if step == WizardStep::Reference {
                    button { class: theme::BTN_SECONDARY, disabled: !complete, onclick: on_restart, "Start new" }
                } else {
                    button { class: theme::BTN_SECONDARY, disabled: busy(), onclick: on_back, "← Back" }
                }
                if step != WizardStep::Reference {
                    button { class: theme::BTN_PRIMARY, disabled: busy(), onclick: on_next, "Continue →" }
                }
            }
        }
    }
}

fn attach_selfie(
    mut wizard: Signal<VerificationState>,
    toasts: Signal<Vec<ToastMessage>>,
    data_url: String,
) {
    match wizard.with_mut(|w| w.attach_selfie(data_url)) {
        Ok(()) => push_toast(toasts, ToastKind::Success, "Selfie captured."),
        Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
    }
}

#[component]
fn DocumentStep(document: Option<DocumentUpload>, on_document: EventHandler<DocumentUpload>) -> Element {
    let max_mb = MAX_DOCUMENT_BYTES / (1024 * 1024);
    rsx! {
        div { class: "space-y-4",
            h2 { class: theme::PANEL_HEADING, "Identity document" }
            p { class: "text-sm {theme::TEXT_SECONDARY}",
                "Upload your passport or national ID card. JPG, PNG or PDF, up to {max_mb} MB."
            }
            input {
                class: "block w-full text-sm text-slate-300 file:mr-4 file:rounded-lg file:border-0 file:bg-sky-500/20 file:px-4 file:py-2 file:text-sky-200",
                r#type: "file",
                accept: ".jpg,.jpeg,.png,.pdf",
                onchange: move |evt| {
                    if let Some(file) = evt.files().into_iter().next() {
                        on_document.call(DocumentUpload {
                            file_name: file.name(),
                            size_bytes: file.size(),
                        });
                    }
                },
            }
            if let Some(doc) = document {
                p { class: "text-sm {theme::ACCENT_TEXT}",
                    "✓ {doc.file_name} ({doc.size_bytes / 1024} KB)"
                }
            }
        }
    }
}

#[component]
fn SelfieStep(
    selfie: Option<String>,
    camera_failed: bool,
    busy: bool,
    on_capture: EventHandler<()>,
    on_photo: EventHandler<String>,
) -> Element {
    let has_selfie = selfie.is_some();
    rsx! {
        div { class: "space-y-4",
            h2 { class: theme::PANEL_HEADING, "Selfie" }
            p { class: "text-sm {theme::TEXT_SECONDARY}",
                "We compare a photo of your face with your document. The camera is switched off right after the picture is taken."
            }
            if let Some(src) = selfie {
                img { class: "selfie-preview", src: "{src}", alt: "Captured selfie" }
            }
            div { class: "flex flex-wrap items-center gap-3",
                button {
                    class: theme::BTN_PRIMARY,
                    disabled: busy,
                    onclick: move |_| on_capture.call(()),
                    if busy {
                        span { class: "spinner" }
                        "Opening camera..."
                    } else if has_selfie {
                        "Retake selfie"
                    } else {
                        "📷 Take selfie"
                    }
                }
            }
            if camera_failed {
                div {
                    label { class: theme::LABEL, "Or upload a photo" }
                    input {
                        class: "mt-2 block w-full text-sm text-slate-300",
                        r#type: "file",
                        accept: "image/*",
                        "capture": "user",
                        onchange: move |evt| async move {
                            let Some(file) = evt.files().into_iter().next() else {
                                return;
                            };
                            let mime = assets::guess_mime(&file.name());
                            match file.read_bytes().await {
                                Ok(bytes) => on_photo.call(assets::data_uri(mime, &bytes)),
                                Err(err) => tracing::warn!("could not read selfie upload: {err}"),
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn PaymentDetailsStep(form: Signal<PaymentDetailsForm>, errors: Vec<FieldError>) -> Element {
    let mut form = form;
    let current = form();
    let error = |field: &str| error_for(&errors, field).map(str::to_string);

    rsx! {
        div { class: "space-y-4",
            h2 { class: theme::PANEL_HEADING, "Payment details" }
            div { class: "grid gap-4 sm:grid-cols-2",
                FormField {
                    label: "Supplier name",
                    value: current.supplier_name.clone(),
                    error: error("supplier_name"),
                    oninput: move |v| form.with_mut(|f| f.supplier_name = v),
                }
                FormField {
                    label: "Supplier email",
                    value: current.supplier_email.clone(),
                    error: error("supplier_email"),
                    input_type: "email",
                    oninput: move |v| form.with_mut(|f| f.supplier_email = v),
                }
                FormField {
                    label: "IBAN / account number",
                    value: current.account_number.clone(),
                    error: error("account_number"),
                    placeholder: "TR33 0006 1005 1978 6457 8413 26",
                    oninput: move |v| form.with_mut(|f| f.account_number = v),
                }
                div { class: "grid grid-cols-3 gap-3",
                    div { class: "col-span-2",
                        FormField {
                            label: "Amount",
                            value: current.amount.clone(),
                            error: error("amount"),
                            inputmode: "decimal",
                            oninput: move |v| form.with_mut(|f| f.amount = v),
                        }
                    }
                    div {
                        label { class: theme::LABEL, "Currency" }
                        select {
                            class: theme::input_class(false),
                            onchange: move |evt| {
                                if let Some(currency) = Currency::from_code(&evt.value()) {
                                    form.with_mut(|f| f.currency = currency);
                                }
                            },
                            for currency in Currency::ALL {
                                option {
                                    key: "{currency.code()}",
                                    value: "{currency.code()}",
                                    selected: currency == current.currency,
                                    "{currency.code()}"
                                }
                            }
                        }
                    }
                }
            }
            FormField {
                label: "Purpose of payment",
                value: current.purpose.clone(),
                error: error("purpose"),
                placeholder: "Invoice number, goods ordered...",
                oninput: move |v| form.with_mut(|f| f.purpose = v),
            }
        }
    }
}

#[component]
fn VerifyStep(verified: bool, busy: bool, on_verify: EventHandler<()>) -> Element {
    rsx! {
        div { class: "space-y-4 text-center",
            h2 { class: theme::PANEL_HEADING, "Verification" }
            if verified {
                p { class: "text-4xl", "✅" }
                p { class: "text-sm {theme::ACCENT_TEXT}", "Your identity is confirmed. Continue to get your payment reference." }
            } else if busy {
                div { class: "flex flex-col items-center gap-3",
                    span { class: "spinner" }
                    p { class: "text-sm {theme::TEXT_SECONDARY}", "Matching your selfie with your document..." }
                }
            } else {
                p { class: "text-sm {theme::TEXT_SECONDARY}", "We check that the selfie matches the document you uploaded." }
                button { class: theme::BTN_PRIMARY, onclick: move |_| on_verify.call(()), "Verify my identity" }
            }
        }
    }
}

#[component]
fn ReferenceStep(reference: Option<String>, details: PaymentDetailsForm) -> Element {
    rsx! {
        div { class: "space-y-4 text-center",
            h2 { class: theme::PANEL_HEADING, "Payment reference" }
            match reference {
                Some(reference) => rsx! {
                    p { class: "font-mono text-3xl font-semibold {theme::ACCENT_TEXT}", "{reference}" }
                    p { class: "text-sm {theme::TEXT_SECONDARY}",
                        "Quote this reference when you transfer {details.amount} {details.currency.code()} "
                        "for {details.supplier_name} at the Lomé agency."
                    }
                },
                None => rsx! {
                    div { class: "flex flex-col items-center gap-3",
                        span { class: "spinner" }
                        p { class: "text-sm {theme::TEXT_SECONDARY}", "Issuing your reference..." }
                    }
                },
            }
        }
    }
}
