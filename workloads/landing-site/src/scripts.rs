//! Page script: catalog refiltering, form validation and chat handoff.
//!
//! Rules and copy are injected from the shop crate so the browser and the
//! CLI validate the same way.

use std::time::Duration;

use copyserv_shop::contact::{
    EMAIL_INVALID, MESSAGE_TOO_SHORT, MIN_MESSAGE_CHARS, MIN_NAME_CHARS, MIN_PHONE_DIGITS,
    NAME_TOO_SHORT, PHONE_FIELD_INVALID, PHONE_INVALID, TIME_AM, TIME_PM,
};
use copyserv_shop::search::ALL_TAG;
use serde_json::json;

use crate::sections::{NotificationKind, SENT_MESSAGE};

/// Settings the script reads from `window.COPYSERV`.
pub fn script_config(whatsapp_number: &str, submit_delay: Duration) -> serde_json::Value {
    let kinds: serde_json::Map<String, serde_json::Value> = NotificationKind::ALL
        .iter()
        .map(|k| {
            (
                k.as_str().to_string(),
                json!({ "icon": k.icon(), "color": k.color() }),
            )
        })
        .collect();

    json!({
        "whatsapp": whatsapp_number,
        "submitDelayMs": submit_delay.as_millis() as u64,
        "allTag": ALL_TAG,
        "minNameChars": MIN_NAME_CHARS,
        "minMessageChars": MIN_MESSAGE_CHARS,
        "minPhoneDigits": MIN_PHONE_DIGITS,
        "dayPeriods": [TIME_AM, TIME_PM],
        "messages": {
            "nameTooShort": NAME_TOO_SHORT,
            "phoneInvalid": PHONE_INVALID,
            "phoneFieldInvalid": PHONE_FIELD_INVALID,
            "messageTooShort": MESSAGE_TOO_SHORT,
            "emailInvalid": EMAIL_INVALID,
            "sent": SENT_MESSAGE,
        },
        "notifications": kinds,
    })
}

/// Render the closing `<script>` block.
pub fn landing_page_scripts(whatsapp_number: &str, submit_delay: Duration) -> String {
    format!(
        "<script>\nwindow.COPYSERV = {};\n{}</script>",
        script_config(whatsapp_number, submit_delay),
        PAGE_SCRIPT
    )
}

const PAGE_SCRIPT: &str = r#"
(function () {
    const cfg = window.COPYSERV;
    const selection = { brand: cfg.allTag, category: cfg.allTag };

    document.querySelectorAll('.filter-btn.active').forEach(btn => {
        selection[btn.dataset.filterField] = btn.dataset.filter;
    });

    function applyFilter() {
        let visible = 0;
        document.querySelectorAll('.product-card').forEach(card => {
            const brandOk = selection.brand === cfg.allTag || card.dataset.brand === selection.brand;
            const categoryOk = selection.category === cfg.allTag || card.dataset.category === selection.category;
            card.hidden = !(brandOk && categoryOk);
            if (!card.hidden) visible++;
        });
        document.getElementById('catalog-count').textContent = visible;
        document.querySelector('.catalog-empty').hidden = visible > 0;
    }

    document.querySelectorAll('.filter-btn').forEach(btn => {
        btn.addEventListener('click', () => {
            const field = btn.dataset.filterField;
            selection[field] = btn.dataset.filter;
            document.querySelectorAll(`.filter-btn[data-filter-field="${field}"]`)
                .forEach(b => b.classList.toggle('active', b === btn));
            applyFilter();
        });
    });

    function isValidPhone(phone) {
        return /^[0-9\s\-+()]+$/.test(phone) && phone.replace(/[^0-9]/g, '').length >= cfg.minPhoneDigits;
    }

    function isValidEmail(email) {
        return /^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(email);
    }

    function showNotification(html, type) {
        const kind = cfg.notifications[type] || cfg.notifications.info;
        document.querySelector('.notification')?.remove();
        const el = document.createElement('div');
        el.className = `notification notification-${type}`;
        el.style.background = kind.color;
        el.innerHTML = `<div class="notification-content"><i class="fas ${kind.icon}"></i><span>${html}</span>` +
            '<button class="notification-close"><i class="fas fa-times"></i></button></div>';
        el.querySelector('.notification-close').addEventListener('click', () => el.remove());
        document.body.appendChild(el);
        setTimeout(() => el.remove(), 5000);
    }

    function escapeHtml(s) {
        return s.replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;');
    }

    function validateField(field) {
        const value = field.value.trim();
        let error = '';
        if (field.name === 'name' && value.length < cfg.minNameChars) error = cfg.messages.nameTooShort;
        if (field.name === 'message' && value.length < cfg.minMessageChars) error = cfg.messages.messageTooShort;
        if (field.name === 'phone' && !isValidPhone(value)) error = cfg.messages.phoneFieldInvalid;
        if (field.name === 'email' && value && !isValidEmail(value)) error = cfg.messages.emailInvalid;

        field.classList.toggle('error', error !== '');
        field.parentNode.querySelector('.error-message')?.remove();
        if (error) {
            const div = document.createElement('div');
            div.className = 'error-message';
            div.textContent = error;
            field.parentNode.appendChild(div);
        }
        return error === '';
    }

    function validateForm(data) {
        const errors = [];
        if (!data.name || data.name.trim().length < cfg.minNameChars) errors.push(cfg.messages.nameTooShort);
        if (!data.phone || !isValidPhone(data.phone)) errors.push(cfg.messages.phoneInvalid);
        if (!data.message || data.message.trim().length < cfg.minMessageChars) errors.push(cfg.messages.messageTooShort);
        if (data.email && data.email.trim() && !isValidEmail(data.email.trim())) errors.push(cfg.messages.emailInvalid);
        if (errors.length) showNotification(errors.map(escapeHtml).join('<br>'), 'error');
        return errors.length === 0;
    }

    function formatTime(now) {
        const hours = now.getHours();
        const pad = n => String(n).padStart(2, '0');
        const period = cfg.dayPeriods[hours < 12 ? 0 : 1];
        return `${hours % 12 || 12}:${pad(now.getMinutes())}:${pad(now.getSeconds())} ${period}`;
    }

    function composeMessage(data) {
        const now = new Date();
        const lines = ['📋 *Solicitud de Servicio Técnico*', '',
            `👤 *Nombre:* ${data.name}`, `📞 *Teléfono:* ${data.phone}`];
        if (data.email && data.email.trim()) lines.push(`📧 *Email:* ${data.email.trim()}`);
        if (data.location && data.location.trim()) lines.push(`📍 *Ubicación:* ${data.location.trim()}`);
        lines.push(`🔧 *Descripción del problema:* ${data.message}`, '',
            `📅 *Fecha:* ${now.getDate()}/${now.getMonth() + 1}/${now.getFullYear()}`,
            `⏰ *Hora:* ${formatTime(now)}`,
            '', 'Por favor, necesito asistencia técnica para mi fotocopiadora. ¡Gracias!');
        return lines.join('\n');
    }

    const form = document.getElementById('contactForm');
    if (!form) return;

    form.querySelectorAll('input, textarea').forEach(input => {
        input.addEventListener('blur', () => validateField(input));
        input.addEventListener('input', () => {
            if (input.classList.contains('error')) validateField(input);
        });
    });

    form.addEventListener('submit', e => {
        e.preventDefault();
        const data = Object.fromEntries(new FormData(form));
        if (!validateForm(data)) return;

        const btn = form.querySelector('button[type="submit"]');
        const original = btn.innerHTML;
        btn.innerHTML = '<i class="fas fa-spinner fa-spin"></i> Enviando...';
        btn.disabled = true;

        setTimeout(() => {
            const url = `https://wa.me/${cfg.whatsapp}?text=${encodeURIComponent(composeMessage(data))}`;
            window.open(url, '_blank');
            form.reset();
            showNotification(cfg.messages.sent, 'success');
            btn.innerHTML = original;
            btn.disabled = false;
        }, cfg.submitDelayMs);
    });

    const observer = new IntersectionObserver(entries => {
        entries.forEach(entry => {
            if (entry.isIntersecting) entry.target.classList.add('loaded');
        });
    }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });
    document.querySelectorAll('section, .service-card, .feature, .badge').forEach(el => {
        el.classList.add('loading');
        observer.observe(el);
    });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_config() {
        let cfg = script_config("51977851120", Duration::from_millis(1500));
        assert_eq!(cfg["whatsapp"], "51977851120");
        assert_eq!(cfg["submitDelayMs"], 1500);
        assert_eq!(cfg["allTag"], "all");
        assert_eq!(cfg["minPhoneDigits"], 9);
        assert_eq!(cfg["dayPeriods"], json!(["a. m.", "p. m."]));
        assert_eq!(cfg["notifications"]["warning"]["color"], "#f39c12");
        assert_eq!(cfg["notifications"]["info"]["icon"], "fa-info-circle");
        assert_eq!(cfg["messages"]["emailInvalid"], "Ingrese un email válido");
    }

    #[test]
    fn test_scripts_block() {
        let html = landing_page_scripts("51977851120", Duration::from_millis(10));
        assert!(html.starts_with("<script>\nwindow.COPYSERV = {"));
        assert!(html.contains("\"submitDelayMs\":10"));
        assert!(html.ends_with("</script>"));
    }
}
