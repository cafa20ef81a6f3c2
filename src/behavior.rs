//! Client behavior script, emitted inline by the renderer.
//! The script owns no configuration of its own: every tunable constant is
//! defined here in Rust and substituted into the template, so server-side
//! rendering and client behavior can't drift apart.

use crate::contact::{ERR_EMAIL, ERR_MESSAGE, ERR_NAME, ERROR_COLOR, MSG_FAILED};

/// Viewport width at or above which the collapsed menu force-closes.
pub const NAV_BREAKPOINT_PX: u32 = 768;

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Bottom inset of the observation root, so sections reveal slightly
/// before their natural edge.
pub const REVEAL_MARGIN_PX: u32 = 50;

/// Delay between consecutive skill-bar animations, in document order.
pub const STAGGER_MS: u64 = 150;

pub fn build_script() -> String {
    SCRIPT_TEMPLATE
        .replace("{{nav_breakpoint}}", &NAV_BREAKPOINT_PX.to_string())
        .replace("{{reveal_threshold}}", &REVEAL_THRESHOLD.to_string())
        .replace("{{reveal_margin}}", &REVEAL_MARGIN_PX.to_string())
        .replace("{{stagger_ms}}", &STAGGER_MS.to_string())
        .replace("{{error_color}}", ERROR_COLOR)
        .replace("{{err_name}}", ERR_NAME)
        .replace("{{err_email}}", ERR_EMAIL)
        .replace("{{err_message}}", ERR_MESSAGE)
        .replace("{{msg_failed}}", MSG_FAILED)
}

const SCRIPT_TEMPLATE: &str = r##"
(function(){
'use strict';

// Navigation menu
var navToggle=document.getElementById('nav-toggle');
var navMenu=document.getElementById('nav-menu');
function closeMenu(){
    if(navToggle)navToggle.classList.remove('active');
    if(navMenu)navMenu.classList.remove('active');
}
if(navToggle&&navMenu){
    navToggle.addEventListener('click',function(){
        navToggle.classList.toggle('active');
        navMenu.classList.toggle('active');
    });
    navMenu.querySelectorAll('a').forEach(function(link){
        link.addEventListener('click',closeMenu);
    });
    document.addEventListener('click',function(e){
        if(!navToggle.contains(e.target)&&!navMenu.contains(e.target))closeMenu();
    });
    window.addEventListener('resize',function(){
        if(window.innerWidth>={{nav_breakpoint}})closeMenu();
    });
}

// Theme toggle; cookie sync is fire-and-forget
var themeToggle=document.getElementById('theme-toggle');
if(themeToggle){
    var icon=themeToggle.querySelector('.theme-icon');
    var syncIcon=function(){
        if(icon)icon.textContent=document.body.classList.contains('dark-theme')?'☀':'☾';
    };
    syncIcon();
    themeToggle.addEventListener('click',function(){
        document.body.classList.toggle('dark-theme');
        syncIcon();
        fetch('/theme',{method:'POST'}).catch(function(){});
    });
}

// Smooth scroll for in-page anchors; missing targets keep default behavior
document.querySelectorAll('a[href^="#"]').forEach(function(link){
    link.addEventListener('click',function(e){
        var target=document.querySelector(link.getAttribute('href'));
        if(target){
            e.preventDefault();
            target.scrollIntoView({behavior:'smooth',block:'start'});
        }
    });
});

// Reveal-on-scroll; one-way, skills section staggers its bars
var observer=new IntersectionObserver(function(entries){
    entries.forEach(function(entry){
        if(!entry.isIntersecting)return;
        entry.target.classList.add('visible');
        observer.unobserve(entry.target);
        if(entry.target.id==='skills'){
            entry.target.querySelectorAll('.skill-progress').forEach(function(bar,i){
                setTimeout(function(){bar.style.width=bar.dataset.level+'%';},i*{{stagger_ms}});
            });
        }
    });
},{threshold:{{reveal_threshold}},rootMargin:'0px 0px -{{reveal_margin}}px 0px'});
document.querySelectorAll('.section').forEach(function(section){observer.observe(section);});

// Contact form
var form=document.getElementById('contact-form');
if(form){
    var showError=function(field,message){
        field.style.borderColor='{{error_color}}';
        var next=field.nextElementSibling;
        if(!next||!next.classList.contains('field-error')){
            next=document.createElement('div');
            next.className='field-error';
            next.style.color='{{error_color}}';
            field.insertAdjacentElement('afterend',next);
        }
        next.textContent=message;
    };
    var clearErrors=function(){
        form.querySelectorAll('.field-error').forEach(function(el){el.remove();});
        form.querySelectorAll('input,textarea').forEach(function(el){el.style.borderColor='';});
    };
    form.addEventListener('submit',function(e){
        e.preventDefault();
        clearErrors();
        var name=form.querySelector('[name=name]');
        var email=form.querySelector('[name=email]');
        var message=form.querySelector('[name=message]');
        var valid=true;
        if(name.value.trim().length<2){showError(name,'{{err_name}}');valid=false;}
        if(!/^[^\s@]+@[^\s@]+\.[^\s@]+$/.test(email.value.trim())){showError(email,'{{err_email}}');valid=false;}
        if(message.value.trim().length<10){showError(message,'{{err_message}}');valid=false;}
        if(!valid)return;
        var btn=form.querySelector('button[type=submit]');
        var label=btn.textContent;
        btn.disabled=true;
        btn.textContent='Sending…';
        fetch('/api/contact',{
            method:'POST',
            headers:{'Content-Type':'application/json'},
            body:JSON.stringify({
                name:name.value.trim(),
                email:email.value.trim(),
                message:message.value.trim()
            })
        })
        .then(function(r){return r.json();})
        .then(function(j){
            if(j.success){
                alert(j.message);
                form.reset();
            }else if(j.errors){
                Object.keys(j.errors).forEach(function(key){
                    var field=form.querySelector('[name='+key+']');
                    if(field)showError(field,j.errors[key]);
                });
            }else{
                alert(j.error||'{{msg_failed}}');
            }
        })
        .catch(function(){alert('{{msg_failed}}');})
        .finally(function(){
            btn.disabled=false;
            btn.textContent=label;
        });
    });
}
})();
"##;
