//! The Euler number at a precision of a thousand digits, and its repeated
//! square roots down to e^(1/1024).

use crate::num::BigDec;
use lazy_static::lazy_static;

lazy_static! {

    /// e
    pub static ref E: BigDec =
        "2.7182818284590452353602874713526624977572470936999595749669676277240766303535475945713821785251664274274663919320030599218174135966290435729003342952605956307381323286279434907632338298807531952510190115738341879307021540891499348841675092447614606680822648001684774118537423454424371075390777449920695517027618386062613313845830007520449338265602976067371132007093287091274437470472306969772093101416928368190255151086574637721112523897844250569536967707854499699679468644549059879316368892300987931277361782154249992295763514822082698951936680331825288693984964651058209392398294887933203625094431173012381970684161403970198376793206832823764648042953118023287825098194558153017567173613320698112509961818815930416903515988885193458072738667385894228792284998920868058257492796104841984443634632449684875602336248270419786232090021609902353043699418491463140934317381436405462531520961836908887070167683964243781405927145635490613031072085103837505101157477041718986106873969655212671546889570350354"
            .parse()
            .expect("constant E initialization");

    // E, sqrt(E), E^(1/4), ..., E^(1/1024), eleven entries at full precision.
    pub(crate) static ref E_ROOTS: Vec<BigDec> = {
        let mut roots = Vec::with_capacity(11);
        roots.push(E.clone());
        for i in 1..11 {
            let next = roots[i - 1]
                .sqrt()
                .expect("constant e-root initialization");
            roots.push(next);
        }
        roots
    };
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_e_digits() {
        let s = E.to_string();
        assert_eq!(E.offset(), 1000);
        assert_eq!(E.max_precision(), 1000);
        assert!(s.starts_with("2.71828182845904523536028747135266249775724709369995"));
    }

    #[test]
    fn test_e_roots() {
        assert_eq!(E_ROOTS.len(), 11);

        // prefixes of the repeated square roots of e
        let known = [
            "1.6487212707001281468486507878141635716537",
            "1.2840254166877414840734205680624364583362",
            "1.1331484530668263168290072278117938725655",
            "1.0644944589178594295633905946428896731007",
            "1.0317434074991026709387478152815071441944",
        ];
        for (i, prefix) in known.iter().enumerate() {
            let s = E_ROOTS[i + 1].to_string();
            assert!(s.starts_with(prefix), "root {}: {}", i + 1, &s[..45]);
        }

        // squaring a root gives back the previous entry
        for i in 1..E_ROOTS.len() {
            let squared = E_ROOTS[i].mul(&E_ROOTS[i]);
            let diff = squared.sub(&E_ROOTS[i - 1]).abs();
            assert!(diff < BigDec::pow_frac_of_ten(990, 990));
        }
    }
}
